use std::any::TypeId;

/// Boxed error returned by constructors and foreign containers
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Only types which are Send + Sync + 'static can be provided
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}

/// Information about a constructor input
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct DependencyInfo {
    /// The required Type
    pub type_info: TypeInfo,
    /// If it is optional or required
    pub optional: bool,
}
impl DependencyInfo {
    pub fn required<T: 'static + ?Sized>() -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            optional: false,
        }
    }

    pub fn optional<T: 'static + ?Sized>() -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            optional: true,
        }
    }
}
impl std::fmt::Display for DependencyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_info)?;
        if self.optional {
            f.write_str(" [optional]")?;
        }
        Ok(())
    }
}

/// Whether the outputs of a constructor can be resolved outside of the defining module
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Exported,
    /// Only resolvable within the defining module and its descendants
    Private,
}
impl Visibility {
    pub fn is_exported(self) -> bool {
        matches!(self, Visibility::Exported)
    }
}
