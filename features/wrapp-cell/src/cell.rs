use crate::{
    config::ApplyConfig,
    container::Container,
    errors::ProvideError,
    info::{Info, InfoNode},
};

/// A unit of an application which can be wired into a container.
///
/// Every kind of cell can describe itself, so a whole application can be
/// rendered before or after it is applied.
pub trait Cell: Send + Sync {
    /// Registers the cell with the container
    fn apply(
        &self,
        container: &mut dyn Container,
        config: &ApplyConfig,
    ) -> Result<(), ProvideError>;

    /// Describes what the cell contributes
    fn info(&self, container: &dyn Container) -> Info;
}

/// A list of cells applied in order
pub struct Group {
    cells: Vec<Box<dyn Cell>>,
}

impl Group {
    pub fn new(cells: Vec<Box<dyn Cell>>) -> Self {
        Self { cells }
    }
}

impl Cell for Group {
    fn apply(
        &self,
        container: &mut dyn Container,
        config: &ApplyConfig,
    ) -> Result<(), ProvideError> {
        for cell in &self.cells {
            cell.apply(container, config)?;
        }
        Ok(())
    }

    fn info(&self, container: &dyn Container) -> Info {
        let mut node = InfoNode::new("");
        for cell in &self.cells {
            node.add(cell.info(container));
        }
        node.into()
    }
}

/// Builds a [Group] from a list of cells
#[macro_export]
macro_rules! group {
    ($($cell:expr),* $(,)?) => {
        $crate::cell::Group::new(vec![$(Box::new($cell) as Box<dyn $crate::cell::Cell>),*])
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        constructor::{Constructor, DynConstructor, Signature},
        provider::provide,
        registry::Registry,
    };

    struct Unnamed;
    impl Constructor for Unnamed {
        fn name(&self) -> &str {
            "unnamed"
        }

        fn signature(&self) -> Signature {
            Signature::new().output::<Unnamed>()
        }
    }

    #[test]
    fn group_info_has_one_child_per_cell() {
        let group = group![provide(vec![Arc::new(Unnamed) as DynConstructor]), group![]];
        let registry = Registry::new();

        let Info::Node(node) = group.info(&registry) else {
            panic!("expected a node");
        };
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.header(), "");
        assert_eq!(group.info(&registry).to_string(), "🚧 unnamed:\n    ⇦ \n\n");
    }
}
