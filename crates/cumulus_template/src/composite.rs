//! Composite grouping of resources.

use crate::resource::Resource;

/// A member added to a template or composite: either a single resource or a
/// nested group.
#[derive(Debug, Clone)]
pub enum TemplateMember {
    Resource(Resource),
    Composite(CompositeResource),
}

impl From<Resource> for TemplateMember {
    fn from(resource: Resource) -> Self {
        TemplateMember::Resource(resource)
    }
}

impl From<CompositeResource> for TemplateMember {
    fn from(composite: CompositeResource) -> Self {
        TemplateMember::Composite(composite)
    }
}

/// An ordered group of resources and/or nested composites.
///
/// A composite is purely a grouping convenience: it never alters the
/// identity or properties of its members and has no serialized form of its
/// own. Templates flatten composites on `add`.
#[derive(Debug, Clone, Default)]
pub struct CompositeResource {
    members: Vec<TemplateMember>,
}

impl CompositeResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource or nested composite.
    pub fn add(&mut self, member: impl Into<TemplateMember>) {
        self.members.push(member.into());
    }

    pub fn members(&self) -> &[TemplateMember] {
        &self.members
    }

    pub fn into_members(self) -> Vec<TemplateMember> {
        self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
