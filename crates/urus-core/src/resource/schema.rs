//! Per-resource schemas.
//!
//! The admin API exposes several structurally identical collections that
//! differ only in path, page size and field list. Describing that variation
//! as data lets one controller implementation drive every screen.

/// The kind of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// A date rendered and submitted as text.
    Date,
    /// A boolean flag.
    Flag,
    /// Binary content referenced by URL, replaced by file upload on edit.
    Image,
}

/// One editable field of a resource.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
}

impl FieldSpec {
    /// Returns the wire name of this field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }
}

/// Data-only description of one resource collection.
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    name: String,
    path: String,
    page_limit: u32,
    fields: Vec<FieldSpec>,
    legacy_paths: Vec<String>,
}

impl ResourceSchema {
    /// Create a new schema with no fields.
    pub fn new(name: impl Into<String>, path: impl Into<String>, page_limit: u32) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            page_limit,
            fields: Vec::new(),
            legacy_paths: Vec::new(),
        }
    }

    /// Append an editable field.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            kind,
        });
        self
    }

    /// Register a legacy path the server still emits in pagination cursors.
    pub fn legacy_path(mut self, path: impl Into<String>) -> Self {
        self.legacy_paths.push(path.into());
        self
    }

    /// Returns the resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collection path relative to the API base.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the page size this screen requests.
    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// Returns the editable fields in form order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns legacy paths the server may still emit for this resource.
    pub fn legacy_paths(&self) -> &[String] {
        &self.legacy_paths
    }

    /// Returns true if the schema declares a field with this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// The banner collection.
    pub fn banner() -> Self {
        Self::new("banner", "api/admin/banner", 5)
            .field("name", FieldKind::Text)
            .field("description", FieldKind::Text)
            .field("image", FieldKind::Image)
    }

    /// The component collection.
    pub fn component() -> Self {
        Self::new("component", "api/admin/component", 4)
            .field("name", FieldKind::Text)
            .field("description", FieldKind::Text)
            .field("type", FieldKind::Text)
            .field("profile_image", FieldKind::Image)
            .field("cover_image", FieldKind::Image)
    }

    /// The news & events collection.
    ///
    /// The server still generates cursors against the pre-rename
    /// `news_and_event` path, hence the legacy alias.
    pub fn news_event() -> Self {
        Self::new("news-event", "api/admin/newsandevent", 5)
            .field("title", FieldKind::Text)
            .field("type", FieldKind::Text)
            .field("content", FieldKind::Text)
            .field("published_date", FieldKind::Date)
            .field("isFeatured", FieldKind::Flag)
            .field("image", FieldKind::Image)
            .legacy_path("api/admin/news_and_event")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_schemas() {
        let banner = ResourceSchema::banner();
        assert_eq!(banner.path(), "api/admin/banner");
        assert_eq!(banner.page_limit(), 5);
        assert!(banner.has_field("description"));
        assert!(!banner.has_field("title"));

        let news = ResourceSchema::news_event();
        assert_eq!(news.legacy_paths(), ["api/admin/news_and_event"]);
        assert!(news.has_field("isFeatured"));
    }

    #[test]
    fn field_order_is_preserved() {
        let names: Vec<_> = ResourceSchema::component()
            .fields()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(
            names,
            ["name", "description", "type", "profile_image", "cover_image"]
        );
    }
}
