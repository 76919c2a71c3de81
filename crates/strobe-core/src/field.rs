//! Named field resources and the catalog they are published through.
//!
//! A [`Field`] is a driver-owned numeric array identified by name. The
//! driver and solver mutate its values in place between steps; attached
//! diagnostics hold non-owning [`FieldHandle`]s captured during resource
//! inspection and only ever read. The whole subsystem is single-threaded
//! and driver-invoked, so interior mutability through `RefCell` is
//! sufficient and borrows never cross a step boundary.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::FieldError;

/// A named `num_points × components` array of `f64` samples.
///
/// Values are stored row-major: point `i`, component `c` lives at
/// `i * components + c`. Single-component fields are the common case;
/// multi-component fields model vector quantities whose columns can be
/// observed independently.
///
/// # Examples
///
/// ```
/// use strobe_core::Field;
///
/// let field = Field::shared("momentum", 4, 2).unwrap();
/// field.values_mut().copy_from_slice(&[
///     0.0, 1.0,
///     2.0, 3.0,
///     4.0, 5.0,
///     6.0, 7.0,
/// ]);
///
/// let mut col = Vec::new();
/// field.copy_column(1, &mut col).unwrap();
/// assert_eq!(col, vec![1.0, 3.0, 5.0, 7.0]);
/// ```
pub struct Field {
    name: String,
    num_points: usize,
    components: usize,
    data: RefCell<Vec<f64>>,
}

/// Non-owning, shared handle to a [`Field`].
///
/// This is what a diagnostic captures when it finds its resource in the
/// [`ResourceCatalog`]: the driver keeps ownership, the diagnostic keeps
/// read access to the values the solver updates in place.
pub type FieldHandle = Rc<Field>;

impl Field {
    /// Create a zero-initialized field.
    ///
    /// Returns `Err(FieldError::EmptyField)` if `num_points == 0`, or
    /// `Err(FieldError::ZeroComponents)` if `components == 0`.
    pub fn new(
        name: impl Into<String>,
        num_points: usize,
        components: usize,
    ) -> Result<Self, FieldError> {
        let name = name.into();
        if num_points == 0 {
            return Err(FieldError::EmptyField { name });
        }
        if components == 0 {
            return Err(FieldError::ZeroComponents { name });
        }
        let data = RefCell::new(vec![0.0; num_points * components]);
        Ok(Self {
            name,
            num_points,
            components,
            data,
        })
    }

    /// Create a zero-initialized field already wrapped in a [`FieldHandle`].
    pub fn shared(
        name: impl Into<String>,
        num_points: usize,
        components: usize,
    ) -> Result<FieldHandle, FieldError> {
        Self::new(name, num_points, components).map(Rc::new)
    }

    /// The field's name. Identity within a [`ResourceCatalog`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of spatial points.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Number of components per point.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Flat length of the backing storage (`num_points * components`).
    pub fn len(&self) -> usize {
        self.num_points * self.components
    }

    /// Always `false`: construction rejects zero-point fields.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Read access to the flat value array.
    ///
    /// # Panics
    ///
    /// Panics if the values are currently mutably borrowed. The
    /// single-threaded lifecycle never holds a borrow across calls, so
    /// this does not happen in a correct driver.
    pub fn values(&self) -> Ref<'_, [f64]> {
        Ref::map(self.data.borrow(), |v| v.as_slice())
    }

    /// Mutable access to the flat value array. Driver/solver side only.
    ///
    /// # Panics
    ///
    /// Panics if the values are currently borrowed.
    pub fn values_mut(&self) -> RefMut<'_, [f64]> {
        RefMut::map(self.data.borrow_mut(), |v| v.as_mut_slice())
    }

    /// Overwrite the full value array from a slice.
    ///
    /// Returns `Err(FieldError::LengthMismatch)` if `values.len()` does
    /// not equal [`len()`](Self::len).
    pub fn set(&self, values: &[f64]) -> Result<(), FieldError> {
        if values.len() != self.len() {
            return Err(FieldError::LengthMismatch {
                name: self.name.clone(),
                expected: self.len(),
                got: values.len(),
            });
        }
        self.data.borrow_mut().copy_from_slice(values);
        Ok(())
    }

    /// Copy one component column into `out` (cleared first).
    ///
    /// Returns `Err(FieldError::ComponentOutOfRange)` if `component`
    /// is not a valid column index.
    pub fn copy_column(&self, component: usize, out: &mut Vec<f64>) -> Result<(), FieldError> {
        if component >= self.components {
            return Err(FieldError::ComponentOutOfRange {
                name: self.name.clone(),
                component,
                components: self.components,
            });
        }
        let data = self.data.borrow();
        out.clear();
        out.extend(
            data.iter()
                .skip(component)
                .step_by(self.components)
                .copied(),
        );
        Ok(())
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("num_points", &self.num_points)
            .field("components", &self.components)
            .finish()
    }
}

/// The driver's published-resources mapping: name → [`FieldHandle`].
///
/// Diagnostics are offered the catalog during resource inspection and
/// capture handles to the fields they need. Iteration order is the
/// publication order, so inspection is deterministic run to run.
///
/// # Examples
///
/// ```
/// use strobe_core::{Field, ResourceCatalog};
///
/// let mut catalog = ResourceCatalog::new();
/// catalog.publish(Field::shared("density", 8, 1).unwrap());
/// assert!(catalog.contains("density"));
/// assert!(catalog.get("momentum").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ResourceCatalog {
    entries: IndexMap<String, FieldHandle>,
}

impl ResourceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a field under its own name.
    ///
    /// Publishing a name twice replaces the prior handle and returns it;
    /// diagnostics that re-inspect afterwards capture the new one (last
    /// publication wins).
    pub fn publish(&mut self, field: FieldHandle) -> Option<FieldHandle> {
        self.entries.insert(field.name().to_string(), field)
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldHandle> {
        self.entries.get(name)
    }

    /// Whether a field with this name has been published.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Published names in publication order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of published fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
