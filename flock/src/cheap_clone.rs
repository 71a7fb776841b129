use std::rc::Rc;
use std::sync::Arc;

/// Things that are fast to clone in the context of an application such as
/// flock. The purpose of this API is to reduce the number of calls to
/// `.clone()` which need to be audited for performance.
///
/// In general, the derived `Clone` for a type is not `CheapClone`; it only
/// is when the type consists of reference-counted handles or other data
/// that is cloned in constant time.
pub trait CheapClone: Clone {
    fn cheap_clone(&self) -> Self {
        self.clone()
    }
}

impl<T: ?Sized> CheapClone for Rc<T> {}
impl<T: ?Sized> CheapClone for Arc<T> {}
impl<T: CheapClone> CheapClone for Option<T> {}
impl CheapClone for slog::Logger {}
