use crate::decorator::Decorator;

/// No-op decorator, returns the component unchanged.
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline(always)]
    fn decorate(&self, inner: In) -> Self::Out {
        inner
    }
}
