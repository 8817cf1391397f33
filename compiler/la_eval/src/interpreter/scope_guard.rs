//! RAII frame guard for the interpreter's scope stack.
//!
//! [`ScopedInterpreter`] pushes a frame on creation and pops it on drop, so
//! an early `?` return or a panic can never leave a stale frame on the
//! stack. It derefs to the interpreter, so code inside the scope calls
//! interpreter methods directly:
//!
//! ```text
//! interpreter.with_frame(frame, |scoped| scoped.eval_block(body))
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::Frame;

/// Interpreter with one extra frame pushed; the frame is popped on drop.
pub struct ScopedInterpreter<'guard, 'a> {
    interpreter: &'guard mut Interpreter<'a>,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.pop_frame();
    }
}

impl<'a> Deref for ScopedInterpreter<'_, 'a> {
    type Target = Interpreter<'a>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Make `frame` the current scope until the guard is dropped.
    pub fn scoped(&mut self, frame: Frame<'a>) -> ScopedInterpreter<'_, 'a> {
        self.push_frame(frame);
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` with `frame` as the current scope.
    pub fn with_frame<T, F>(&mut self, frame: Frame<'a>, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> T,
    {
        let mut scoped = self.scoped(frame);
        f(&mut scoped)
    }
}
