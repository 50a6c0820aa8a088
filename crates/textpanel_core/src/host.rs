//! Capabilities the embedding host provides to the editor widgets.

use crate::error::PanelError;
use crate::models::VariableDescriptor;

/// Receiver for committed option values (the host's `onChange`).
pub trait ChangeSink<T> {
    fn emit(&mut self, next: T);
}

impl<T, F> ChangeSink<T> for F
where
    F: FnMut(T),
{
    fn emit(&mut self, next: T) {
        self(next)
    }
}

/// Enumerates the host's substitution variables at render time.
///
/// The set may change between renders without notice, so callers query it
/// every time they need it.
pub trait VariableRegistry {
    fn variables(&self) -> Vec<VariableDescriptor>;
}

impl VariableRegistry for [VariableDescriptor] {
    fn variables(&self) -> Vec<VariableDescriptor> {
        self.to_vec()
    }
}

impl VariableRegistry for Vec<VariableDescriptor> {
    fn variables(&self) -> Vec<VariableDescriptor> {
        self.clone()
    }
}

impl<R: VariableRegistry + ?Sized> VariableRegistry for &R {
    fn variables(&self) -> Vec<VariableDescriptor> {
        (**self).variables()
    }
}

/// Fixed variable set supplied by the host at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticVariables {
    variables: Vec<VariableDescriptor>,
}

impl StaticVariables {
    pub fn new(variables: Vec<VariableDescriptor>) -> Self {
        Self { variables }
    }

    /// Replace the variable set; the next suggestion build picks it up.
    pub fn replace(&mut self, variables: Vec<VariableDescriptor>) {
        self.variables = variables;
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl VariableRegistry for StaticVariables {
    fn variables(&self) -> Vec<VariableDescriptor> {
        self.variables.clone()
    }
}

/// Handle to the surface's "format document" action, handed over on mount.
///
/// Implementations return [`PanelError::SurfaceDisposed`] once the surface they
/// point at is gone.
pub trait FormatAction {
    fn run(&mut self) -> Result<(), PanelError>;
}
