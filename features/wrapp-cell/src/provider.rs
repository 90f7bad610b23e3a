use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Instant,
};

use crate::{
    cell::Cell,
    config::ApplyConfig,
    constructor::{name_and_location, DynConstructor},
    container::{Container, ProvideInfo, ProvideOptions},
    errors::ProvideError,
    info::{Info, InfoNode},
    types::Visibility,
};

/// A cell providing a set of constructors
pub struct Provider {
    ctors: Vec<DynConstructor>,
    visibility: Visibility,
    /// None until the first apply
    infos: Mutex<Option<Vec<ProvideInfo>>>,
}

impl Provider {
    pub fn new(ctors: Vec<DynConstructor>, visibility: Visibility) -> Self {
        Self {
            ctors,
            visibility,
            infos: Mutex::new(None),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn constructors(&self) -> &[DynConstructor] {
        &self.ctors
    }

    fn lock_infos(&self) -> MutexGuard<'_, Option<Vec<ProvideInfo>>> {
        // The infos are always in a valid state, even if a holder panicked
        self.infos.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Cell for Provider {
    fn apply(
        &self,
        container: &mut dyn Container,
        config: &ApplyConfig,
    ) -> Result<(), ProvideError> {
        // The same provider may be applied to many containers, so the
        // provide info is only filled by the first apply.
        let mut infos = self.lock_infos();

        let fill_info = infos.is_none();
        let infos = infos.get_or_insert_with(|| vec![ProvideInfo::default(); self.ctors.len()]);
        if fill_info {
            tracing::debug!("Filling provide info for {} constructors", self.ctors.len());
        }

        for (ctor, info) in self.ctors.iter().zip(infos.iter_mut()) {
            let options = ProvideOptions {
                export: self.visibility.is_exported(),
                fill_info: fill_info.then_some(info),
            };

            let start = Instant::now();
            container.provide(ctor.clone(), options)?;
            let elapsed = start.elapsed();

            if elapsed > config.log_threshold {
                tracing::info!(
                    "Provided {} in {:?}",
                    name_and_location(ctor.as_ref()),
                    elapsed
                );
            } else {
                tracing::debug!(
                    "Provided {} in {:?}",
                    name_and_location(ctor.as_ref()),
                    elapsed
                );
            }
        }
        Ok(())
    }

    fn info(&self, _container: &dyn Container) -> Info {
        let infos = self.lock_infos();

        let private_symbol = match self.visibility {
            Visibility::Exported => "",
            Visibility::Private => "🔒️",
        };

        let mut node = InfoNode::default();
        for (i, ctor) in self.ctors.iter().enumerate() {
            let mut ctor_node = InfoNode::new(format!(
                "🚧{} {}",
                private_symbol,
                name_and_location(ctor.as_ref())
            ));
            ctor_node.set_condensed();

            let info = infos.as_ref().and_then(|infos| infos.get(i));
            let mut ins: Vec<String> = info
                .map(|info| info.inputs.iter().map(ToString::to_string).collect())
                .unwrap_or_default();
            let mut outs: Vec<String> = info
                .map(|info| info.outputs.iter().map(ToString::to_string).collect())
                .unwrap_or_default();
            ins.sort();
            outs.sort();

            if !ins.is_empty() {
                ctor_node.add_leaf(format_args!("⇨ {}", ins.join(", ")));
            }
            ctor_node.add_leaf(format_args!("⇦ {}", outs.join(", ")));
            node.add(ctor_node);
        }
        node.into()
    }
}

/// Creates a cell providing the given constructors to the whole application
///
/// A constructor is any function taking zero or more dependencies and returning
/// a `Result` of the provided type:
///
/// ```rust
/// use std::{convert::Infallible, sync::Arc};
/// use wrapp_cell::{ctor, provide};
///
/// struct Flower;
/// struct Honey;
///
/// fn new_flower() -> Result<Flower, Infallible> {
///     Ok(Flower)
/// }
///
/// fn new_honey(flower: Arc<Flower>) -> Result<Honey, Infallible> {
///     Ok(Honey)
/// }
///
/// let cell = provide(vec![ctor(new_flower), ctor(new_honey)]);
/// ```
///
/// If a constructor depends on a type no constructor provides, checking the
/// container fails with an error pointing at the missing type.
pub fn provide(ctors: Vec<DynConstructor>) -> Provider {
    Provider::new(ctors, Visibility::Exported)
}

/// Like [provide], but the provided types are only available within the
/// defining module and its nested modules.
pub fn provide_private(ctors: Vec<DynConstructor>) -> Provider {
    Provider::new(ctors, Visibility::Private)
}
