//! Scope frames, variable cells and closures.
//!
//! A [`Frame`] is the growable scope of the block or call currently
//! executing. A [`FrozenFrame`] is a snapshot of a frame's two maps, shared
//! behind an `Rc`, and is what every child frame and every function closure
//! points at as its parent.
//!
//! ```text
//!   Frame (live, growable)
//!     └─ parent: Rc<FrozenFrame>   (snapshot taken when the child was made)
//!          └─ parent: Rc<FrozenFrame>
//!               └─ ... root
//! ```
//!
//! Snapshots copy map *entries*, not values: a [`Variable`] is a shared
//! cell, so an assignment made through a snapshot lands in the same cell
//! the owning frame sees. Bindings *added* to a frame after a snapshot was
//! taken are invisible through that snapshot.
//!
//! Variables and functions live in separate maps; one name may resolve to
//! both at once.
//!
//! Snapshots only ever point at older snapshots, so the `Rc` graph has no
//! cycles.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use la_ir::{Block, FunctionDeclaration};
use rustc_hash::FxHashMap;

/// Storage for one variable binding.
///
/// Cloning yields another handle to the same cell.
#[derive(Clone, Debug)]
pub struct Variable(Rc<Cell<i32>>);

impl Variable {
    pub fn new(value: i32) -> Self {
        Variable(Rc::new(Cell::new(value)))
    }

    #[inline]
    pub fn get(&self) -> i32 {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, value: i32) {
        self.0.set(value);
    }

    /// Whether both handles refer to the same cell.
    pub fn same_cell(&self, other: &Variable) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A declared function together with the scope it was declared in.
///
/// The captured scope is the snapshot taken *before* the function's own
/// name was added, so it never contains the function itself.
#[derive(Clone)]
pub struct Function<'a> {
    declaration: &'a FunctionDeclaration,
    environment: Rc<FrozenFrame<'a>>,
}

impl<'a> Function<'a> {
    pub fn new(declaration: &'a FunctionDeclaration, environment: Rc<FrozenFrame<'a>>) -> Self {
        Function {
            declaration,
            environment,
        }
    }

    pub fn name(&self) -> &'a str {
        &self.declaration.name
    }

    pub fn parameters(&self) -> &'a [String] {
        &self.declaration.parameters
    }

    pub fn body(&self) -> &'a Block {
        &self.declaration.body
    }

    /// Scope the body runs in (as parent of the call frame).
    pub fn environment(&self) -> &Rc<FrozenFrame<'a>> {
        &self.environment
    }
}

impl fmt::Debug for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name())
            .field("parameters", &self.parameters())
            .finish_non_exhaustive()
    }
}

/// The maps shared by both frame kinds.
#[derive(Clone, Default)]
struct Bindings<'a> {
    variables: FxHashMap<&'a str, Variable>,
    functions: FxHashMap<&'a str, Function<'a>>,
    parent: Option<Rc<FrozenFrame<'a>>>,
}

impl<'a> Bindings<'a> {
    fn resolve_variable(&self, name: &str) -> Option<Variable> {
        let mut bindings = self;
        loop {
            if let Some(variable) = bindings.variables.get(name) {
                return Some(variable.clone());
            }
            bindings = &bindings.parent.as_deref()?.bindings;
        }
    }

    fn resolve_function(&self, name: &str) -> Option<Function<'a>> {
        let mut bindings = self;
        loop {
            if let Some(function) = bindings.functions.get(name) {
                return Some(function.clone());
            }
            bindings = &bindings.parent.as_deref()?.bindings;
        }
    }
}

/// Growable scope frame.
#[derive(Default)]
pub struct Frame<'a> {
    bindings: Bindings<'a>,
}

impl<'a> Frame<'a> {
    /// Frame with no parent.
    pub fn root() -> Self {
        Frame::default()
    }

    /// Empty frame whose lookups fall back to `parent`.
    pub fn child_of(parent: Rc<FrozenFrame<'a>>) -> Self {
        Frame {
            bindings: Bindings {
                parent: Some(parent),
                ..Bindings::default()
            },
        }
    }

    /// Empty frame whose parent is a snapshot of `self` as it is now.
    pub fn child(&self) -> Self {
        Frame::child_of(Rc::new(self.freeze()))
    }

    /// Look `name` up in this frame, then each ancestor.
    pub fn resolve_variable(&self, name: &str) -> Option<Variable> {
        self.bindings.resolve_variable(name)
    }

    pub fn resolve_function(&self, name: &str) -> Option<Function<'a>> {
        self.bindings.resolve_function(name)
    }

    /// Add a fresh cell for `name` to this frame.
    ///
    /// Does not check whether `name` is already visible; the interpreter
    /// does that before calling.
    pub fn declare_variable(&mut self, name: &'a str, value: i32) -> Variable {
        let variable = Variable::new(value);
        self.bindings.variables.insert(name, variable.clone());
        variable
    }

    /// Add or replace the function bound to `name` in this frame.
    pub fn declare_function(&mut self, name: &'a str, function: Function<'a>) {
        self.bindings.functions.insert(name, function);
    }

    /// Copy both maps, keeping the same parent.
    pub fn freeze(&self) -> FrozenFrame<'a> {
        FrozenFrame {
            bindings: self.bindings.clone(),
        }
    }

    /// Number of variables declared directly in this frame.
    #[cfg(test)]
    pub(crate) fn local_variable_count(&self) -> usize {
        self.bindings.variables.len()
    }
}

/// Immutable snapshot of a [`Frame`].
pub struct FrozenFrame<'a> {
    bindings: Bindings<'a>,
}

#[cfg(test)]
impl<'a> FrozenFrame<'a> {
    pub(crate) fn resolve_variable(&self, name: &str) -> Option<Variable> {
        self.bindings.resolve_variable(name)
    }

    pub(crate) fn resolve_function(&self, name: &str) -> Option<Function<'a>> {
        self.bindings.resolve_function(name)
    }
}

impl fmt::Debug for FrozenFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut variables: Vec<_> = self.bindings.variables.keys().collect();
        let mut functions: Vec<_> = self.bindings.functions.keys().collect();
        variables.sort_unstable();
        functions.sort_unstable();
        f.debug_struct("FrozenFrame")
            .field("variables", &variables)
            .field("functions", &functions)
            .field("has_parent", &self.bindings.parent.is_some())
            .finish()
    }
}
