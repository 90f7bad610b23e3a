use std::{
    any::TypeId,
    collections::{BTreeMap, HashSet},
    fmt::Debug,
};

use crate::{
    constructor::{name_and_location, DynConstructor, Signature},
    container::{Container, ProvideInfo, ProvideOptions},
    errors::{GraphError, GraphErrors, ProvideError},
    types::{DependencyInfo, TypeInfo, Visibility},
};

/// In-memory [Container] recording every provided constructor
///
/// Keeps one binding per provided type and can check the resulting
/// dependency graph for missing types and cycles.
#[derive(Default)]
pub struct Registry {
    /// Provided type -> index into `constructors`
    bindings: BTreeMap<TypeId, usize>,
    constructors: Vec<ProvidedConstructor>,
}

/// A constructor accepted by the [Registry]
pub struct ProvidedConstructor {
    /// Name and location of the constructor
    pub name: String,
    pub visibility: Visibility,
    pub info: ProvideInfo,
    pub constructor: DynConstructor,
}

impl Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_struct("Registry");
        for ctor in &self.constructors {
            map.field(&ctor.name, &ctor.visibility);
        }
        map.finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered constructors
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// All registered constructors in registration order
    pub fn constructors(&self) -> &[ProvidedConstructor] {
        &self.constructors
    }

    pub fn is_provided<T: 'static + ?Sized>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    /// The constructor providing the given type
    pub fn binding(&self, type_info: &TypeInfo) -> Option<&ProvidedConstructor> {
        self.bindings
            .get(&type_info.type_id)
            .map(|index| &self.constructors[*index])
    }

    /// Validate the graph of all registered constructors
    ///
    /// Returns a list of all issues
    pub fn check(&self) -> Result<(), GraphErrors> {
        let mut checked = HashSet::new();
        let mut errors = Vec::new();
        for (output, index) in self.output_entries() {
            let mut dependency_chain = Vec::new();
            check_recurse(
                self,
                &mut checked,
                &mut errors,
                &mut dependency_chain,
                output,
                &self.constructors[index].info.inputs,
            );
        }

        if !errors.is_empty() {
            return Err(GraphErrors { errors });
        }

        return Ok(());

        fn check_recurse(
            registry: &Registry,
            checked: &mut HashSet<TypeId>,
            errors: &mut Vec<GraphError>,
            dependency_chain: &mut Vec<TypeInfo>,
            info: TypeInfo,
            dependencies: &[DependencyInfo],
        ) {
            // Circular Dependency Check
            if let Some(first) = dependency_chain.first() {
                if dependency_chain.contains(&info) {
                    let mut chain = dependency_chain.clone();
                    chain.push(info); // Add current so chain is complete

                    errors.push(GraphError::CircularDependency {
                        from: *first,
                        to: info,
                        chain,
                    });
                }
            }

            // Skip other checks if already checked
            if !checked.insert(info.type_id) {
                return;
            };

            dependency_chain.push(info);

            for dependency in dependencies {
                let Some(index) = registry.bindings.get(&dependency.type_info.type_id) else {
                    if !dependency.optional {
                        errors.push(GraphError::MissingDependency {
                            dependency: *dependency,
                            required_by: info,
                        });
                    }

                    continue;
                };

                check_recurse(
                    registry,
                    checked,
                    errors,
                    dependency_chain,
                    dependency.type_info,
                    &registry.constructors[*index].info.inputs,
                );
            }

            dependency_chain.pop();
        }
    }

    /// Every provided type with the index of its constructor, in registration order
    fn output_entries(&self) -> impl Iterator<Item = (TypeInfo, usize)> + '_ {
        self.constructors
            .iter()
            .enumerate()
            .flat_map(|(index, ctor)| ctor.info.outputs.iter().map(move |output| (*output, index)))
    }
}

impl Container for Registry {
    fn provide(
        &mut self,
        ctor: DynConstructor,
        options: ProvideOptions<'_>,
    ) -> Result<(), ProvideError> {
        let name = name_and_location(ctor.as_ref());
        let Signature { inputs, outputs } = ctor.signature();

        if let Err(reason) = validate_signature(&inputs, &outputs) {
            return Err(ProvideError::InvalidSignature {
                constructor: name,
                reason,
            });
        }

        for output in &outputs {
            if let Some(existing) = self.bindings.get(&output.type_id) {
                return Err(ProvideError::AlreadyProvided {
                    constructor: name,
                    type_info: *output,
                    existing: self.constructors[*existing].name.clone(),
                });
            }
        }

        let visibility = match options.export {
            true => Visibility::Exported,
            false => Visibility::Private,
        };

        let index = self.constructors.len();
        for output in &outputs {
            self.bindings.insert(output.type_id, index);
        }

        let info = ProvideInfo { inputs, outputs };
        if let Some(slot) = options.fill_info {
            *slot = info.clone();
        }

        tracing::debug!("Registered {} as {:?}", name, visibility);
        self.constructors.push(ProvidedConstructor {
            name,
            visibility,
            info,
            constructor: ctor,
        });

        Ok(())
    }
}

fn validate_signature(
    inputs: &[DependencyInfo],
    outputs: &[TypeInfo],
) -> Result<(), &'static str> {
    if outputs.is_empty() {
        return Err("a constructor must provide at least one type");
    }

    let mut seen = HashSet::new();
    if !outputs.iter().all(|output| seen.insert(output.type_id)) {
        return Err("a constructor must not provide the same type twice");
    }

    if inputs
        .iter()
        .any(|input| seen.contains(&input.type_info.type_id))
    {
        return Err("a constructor must not depend on a type it provides");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::constructor::{ctor, Constructor};

    struct Flower;
    struct Sun;
    struct Bee;
    struct Pollen;

    fn new_flower(_sun: Arc<Sun>) -> Result<Flower, std::convert::Infallible> {
        Ok(Flower)
    }

    fn new_sun() -> Result<Sun, std::convert::Infallible> {
        Ok(Sun)
    }

    fn new_bee(
        _flower: Arc<Flower>,
        _pollen: Option<Arc<Pollen>>,
    ) -> Result<Bee, std::convert::Infallible> {
        Ok(Bee)
    }

    struct Manual {
        signature: Signature,
    }
    impl Constructor for Manual {
        fn name(&self) -> &str {
            "manual"
        }

        fn signature(&self) -> Signature {
            self.signature.clone()
        }
    }

    fn manual(signature: Signature) -> DynConstructor {
        Arc::new(Manual { signature })
    }

    #[test]
    fn provide_records_bindings_and_fills_info() {
        let mut registry = Registry::new();
        let mut info = ProvideInfo::default();
        assert!(info.is_empty());

        registry
            .provide(
                ctor(new_flower),
                ProvideOptions {
                    export: false,
                    fill_info: Some(&mut info),
                },
            )
            .unwrap();

        assert!(!info.is_empty());
        assert!(registry.is_provided::<Flower>());
        assert!(!registry.is_provided::<Sun>());
        assert_eq!(info.inputs, vec![DependencyInfo::required::<Sun>()]);
        assert_eq!(info.outputs, vec![TypeInfo::of::<Flower>()]);

        let binding = registry.binding(&TypeInfo::of::<Flower>()).unwrap();
        assert_eq!(binding.visibility, Visibility::Private);
        assert!(binding.name.contains("new_flower"));
    }

    #[test]
    fn provide_rejects_duplicate_types() {
        let mut registry = Registry::new();
        registry
            .provide(ctor(new_sun), ProvideOptions::default())
            .unwrap();

        let err = registry
            .provide(ctor(new_sun), ProvideOptions::default())
            .unwrap_err();

        let ProvideError::AlreadyProvided { type_info, .. } = err else {
            panic!("expected a duplicate, got {err:?}");
        };
        assert_eq!(type_info, TypeInfo::of::<Sun>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn provide_rejects_invalid_signatures() {
        let mut registry = Registry::new();

        for signature in [
            Signature::new().input::<Sun>(),
            Signature::new().output::<Sun>().output::<Sun>(),
            Signature::new().input::<Sun>().output::<Sun>(),
        ] {
            let err = registry
                .provide(manual(signature), ProvideOptions::default())
                .unwrap_err();
            assert!(matches!(err, ProvideError::InvalidSignature { .. }));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn check_reports_missing_dependencies() {
        let mut registry = Registry::new();
        registry
            .provide(ctor(new_bee), ProvideOptions::default())
            .unwrap();

        let errors = registry.check().unwrap_err().errors;
        assert_eq!(errors.len(), 1);
        let GraphError::MissingDependency { dependency, .. } = &errors[0] else {
            panic!("expected a missing dependency, got {:?}", errors[0]);
        };
        assert_eq!(dependency.type_info, TypeInfo::of::<Flower>());

        registry
            .provide(ctor(new_flower), ProvideOptions::default())
            .unwrap();
        registry
            .provide(ctor(new_sun), ProvideOptions::default())
            .unwrap();
        registry.check().unwrap();
    }

    #[test]
    fn check_reports_cycles() {
        let mut registry = Registry::new();
        registry
            .provide(
                manual(Signature::new().input::<Sun>().output::<Flower>()),
                ProvideOptions::default(),
            )
            .unwrap();
        registry
            .provide(
                manual(Signature::new().input::<Flower>().output::<Sun>()),
                ProvideOptions::default(),
            )
            .unwrap();

        let errors = registry.check().unwrap_err().errors;
        assert!(errors
            .iter()
            .any(|error| matches!(error, GraphError::CircularDependency { .. })));
    }
}
