//! The generic wrapping machinery shared by both component families.
//!
//! A [`Decorator`] is a small unit value that turns one component into a
//! wrapped component. Decorator units compose with [`DecoratorExt::and_then`]
//! and [`DecoratorExt::compose`] before ever touching a component, so a whole
//! chain can be described as a value and applied to a leaf in one call. This
//! replaces container-style wiring: the chain you want is spelled out
//! explicitly at the construction site.

mod composer;
mod decorator_fn;
mod identity;

pub use composer::DecoratorComposer;
pub use decorator_fn::{DecoratorFn, decorator_fn};
pub use identity::IdentityDecorator;

/// Wraps a component of type `In` into another component.
///
/// `decorate` consumes the inner component: once wrapped, the decorator's
/// output is the sole owner of what it wraps.
pub trait Decorator<In> {
    type Out;

    fn decorate(&self, inner: In) -> Self::Out;
}

pub trait DecoratorExt<In>: Decorator<In> {
    /// Apply `self` first, then `decorator` — `decorator` ends up outermost.
    fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D>
    where
        Self: Sized,
    {
        DecoratorComposer::new(self, decorator)
    }

    /// Apply `decorator` first, then `self` — `self` ends up outermost.
    fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self>
    where
        Self: Sized,
    {
        DecoratorComposer::new(decorator, self)
    }
}

impl<T: Decorator<In> + ?Sized, In> DecoratorExt<In> for T {}
