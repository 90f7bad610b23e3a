use crate::{
    constructor::DynConstructor,
    errors::ProvideError,
    types::{DependencyInfo, TypeInfo},
};

/// The dependency injection container cells register their constructors with.
///
/// Resolution and invocation of constructors are up to the implementation.
pub trait Container {
    /// Registers a constructor
    ///
    /// When `options.fill_info` is set, the container writes the constructor's
    /// inputs and outputs into it.
    fn provide(
        &mut self,
        ctor: DynConstructor,
        options: ProvideOptions<'_>,
    ) -> Result<(), ProvideError>;
}

/// Options passed along with every [Container::provide] call
#[derive(Debug, Default)]
pub struct ProvideOptions<'a> {
    /// If the provided types are visible outside the defining module
    pub export: bool,
    /// Slot receiving the provide info
    pub fill_info: Option<&'a mut ProvideInfo>,
}

/// Inputs and outputs of a provided constructor, as seen by the container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvideInfo {
    pub inputs: Vec<DependencyInfo>,
    pub outputs: Vec<TypeInfo>,
}
impl ProvideInfo {
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }
}
