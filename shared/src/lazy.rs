//! deferred module loader
//!
//! a `LazyModule` holds a loader that is not run until the first call to
//! `load()`. the resulting future is shared, so every later observer of the
//! same handle sees the one retrieval and its cached outcome.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::error::LoadError;

/// cloneable handle on the single retrieval of a lazy module
pub type LoadFuture<T> = Shared<LocalBoxFuture<'static, Result<T, LoadError>>>;

type Loader<T> = Box<dyn FnOnce() -> LocalBoxFuture<'static, Result<T, LoadError>>>;

/// load state of one module within one mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Pending,
    Resolved(T),
    Failed(LoadError),
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }
}

impl<T: Clone> From<Option<&Result<T, LoadError>>> for LoadState<T> {
    fn from(outcome: Option<&Result<T, LoadError>>) -> Self {
        match outcome {
            None => Self::Pending,
            Some(Ok(value)) => Self::Resolved(value.clone()),
            Some(Err(err)) => Self::Failed(err.clone()),
        }
    }
}

enum Slot<T> {
    Idle(Loader<T>),
    /// loader taken out and running, future not stored yet
    Starting,
    Started(LoadFuture<T>),
}

/// lazy capability: started on first observation, memoized afterwards
pub struct LazyModule<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T: Clone + 'static> LazyModule<T> {
    pub fn new<F>(loader: F) -> Self
    where
        F: FnOnce() -> LocalBoxFuture<'static, Result<T, LoadError>> + 'static,
    {
        Self {
            slot: Rc::new(RefCell::new(Slot::Idle(Box::new(loader)))),
        }
    }

    /// start the retrieval if needed and return the shared outcome
    ///
    /// the loader runs with no borrow held, so it may inspect this handle.
    /// asking for the module again from inside its own loader is a cycle and
    /// fails instead of deadlocking.
    pub fn load(&self) -> LoadFuture<T> {
        let loader = {
            let mut slot = self.slot.borrow_mut();
            match std::mem::replace(&mut *slot, Slot::Starting) {
                Slot::Idle(loader) => loader,
                Slot::Started(future) => {
                    *slot = Slot::Started(future.clone());
                    return future;
                }
                Slot::Starting => {
                    let cycle = LoadError::InvalidModule("module requested while starting".to_string());
                    return futures::future::ready(Err(cycle)).boxed_local().shared();
                }
            }
        };

        let future = loader().shared();
        *self.slot.borrow_mut() = Slot::Started(future.clone());
        future
    }

    /// current state, without starting the retrieval
    pub fn state(&self) -> LoadState<T> {
        match &*self.slot.borrow() {
            Slot::Idle(_) | Slot::Starting => LoadState::Pending,
            Slot::Started(future) => future.peek().into(),
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(&*self.slot.borrow(), Slot::Idle(_))
    }
}

impl<T> Clone for LazyModule<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for LazyModule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let started = !matches!(&*self.slot.borrow(), Slot::Idle(_));
        f.debug_struct("LazyModule").field("started", &started).finish()
    }
}
