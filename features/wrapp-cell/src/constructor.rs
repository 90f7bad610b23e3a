use std::{
    any::{type_name, Any},
    borrow::Cow,
    panic::Location,
    path::Path,
    sync::Arc,
};

use crate::types::{DependencyInfo, DynError, Injectable, TypeInfo};

/// A callable which provides one or more types from zero or more dependencies.
///
/// Cells never call or inspect constructors themselves, they only forward them
/// to a [Container](crate::container::Container), which reads the signature.
pub trait Constructor: Send + Sync + 'static {
    /// Human readable name, usually the path of the wrapped function
    fn name(&self) -> &str;

    /// Where the constructor was declared
    fn location(&self) -> Option<&'static Location<'static>> {
        None
    }

    /// The declared inputs and outputs
    fn signature(&self) -> Signature;
}

/// Shared handle to a constructor
pub type DynConstructor = Arc<dyn Constructor>;

/// Declared inputs and outputs of a constructor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub inputs: Vec<DependencyInfo>,
    pub outputs: Vec<TypeInfo>,
}
impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input<T: 'static + ?Sized>(mut self) -> Self {
        self.inputs.push(DependencyInfo::required::<T>());
        self
    }

    pub fn optional_input<T: 'static + ?Sized>(mut self) -> Self {
        self.inputs.push(DependencyInfo::optional::<T>());
        self
    }

    pub fn output<T: 'static + ?Sized>(mut self) -> Self {
        self.outputs.push(TypeInfo::of::<T>());
        self
    }
}

/// A constructor parameter
pub trait Dependency {
    fn dependency_info() -> DependencyInfo;
}
impl<T: Injectable> Dependency for Arc<T> {
    fn dependency_info() -> DependencyInfo {
        DependencyInfo::required::<T>()
    }
}
// Missing or disabled types resolve to None
impl<T: Injectable> Dependency for Option<Arc<T>> {
    fn dependency_info() -> DependencyInfo {
        DependencyInfo::optional::<T>()
    }
}

/// Functions usable as a constructor
///
/// Implemented for `Fn(A, B, ..) -> Result<T, E>` with up to four [Dependency] parameters.
pub trait ConstructorFn<Args>: Send + Sync + 'static {
    fn signature() -> Signature;
}

macro_rules! impl_constructor_fn {
    ($($arg:ident),*) => {
        impl<Func, Out, E, $($arg,)*> ConstructorFn<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Result<Out, E> + Send + Sync + 'static,
            Out: Injectable,
            E: Into<DynError>,
            $($arg: Dependency,)*
        {
            fn signature() -> Signature {
                Signature {
                    inputs: vec![$(<$arg as Dependency>::dependency_info()),*],
                    outputs: vec![TypeInfo::of::<Out>()],
                }
            }
        }
    };
}

impl_constructor_fn!();
impl_constructor_fn!(A1);
impl_constructor_fn!(A1, A2);
impl_constructor_fn!(A1, A2, A3);
impl_constructor_fn!(A1, A2, A3, A4);

/// A plain function wrapped as a [Constructor]
pub struct FnConstructor {
    name: Cow<'static, str>,
    location: &'static Location<'static>,
    signature: Signature,
    function: Arc<dyn Any + Send + Sync>,
}
impl std::fmt::Debug for FnConstructor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnConstructor")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}
impl FnConstructor {
    #[track_caller]
    pub fn new<Args, Func: ConstructorFn<Args>>(function: Func) -> Self {
        Self {
            name: Cow::Borrowed(type_name::<Func>()),
            location: Location::caller(),
            signature: Func::signature(),
            function: Arc::new(function),
        }
    }

    /// Overrides the reported name
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// The wrapped function, for containers which invoke constructors
    pub fn function(&self) -> &(dyn Any + Send + Sync) {
        self.function.as_ref()
    }
}
impl Constructor for FnConstructor {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<&'static Location<'static>> {
        Some(self.location)
    }

    fn signature(&self) -> Signature {
        self.signature.clone()
    }
}

/// Wraps a function into a shared [Constructor]
#[track_caller]
pub fn ctor<Args, Func: ConstructorFn<Args>>(function: Func) -> DynConstructor {
    Arc::new(FnConstructor::new(function))
}

/// Renders `name (file:line)`, or only the name if the location is unknown
pub fn name_and_location(ctor: &dyn Constructor) -> String {
    match ctor.location() {
        Some(location) => {
            let file = Path::new(location.file())
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or(location.file());
            format!("{} ({}:{})", ctor.name(), file, location.line())
        }
        None => ctor.name().to_string(),
    }
}
