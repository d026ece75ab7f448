//! Documentation catalog: ordered, validated, immutable once built.
//!
//! Every catalog, whether it comes from the embedded hosting table, an
//! external JSON file, or a decoded pack, is assembled through
//! [`CatalogBuilder`] so the same identifier and link rules apply.

mod hosting;

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{ApiDetails, OrderedMap, PREALLOC_LIMIT};

/// Anything a remap line can carry on its left-hand side: non-empty, no
/// `=`, no `"`, no line breaks.
static RE_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^[^="\r\n]+$"#).unwrap());
/// Absolute URI: scheme, colon, then no blanks or quotes.
static RE_HELP_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Za-z][A-Za-z0-9+.\-]*:[^\s"]+$"#).unwrap());

/// Ordered mapping from API identifier to its documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: OrderedMap<ApiDetails>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The embedded .NET hosting API catalog.
    pub fn hosting() -> Result<Self> {
        let mut builder = Catalog::builder();
        for decl in hosting::HOSTING_API {
            builder.insert(decl.id, details_from_decl(decl)?)?;
        }
        Ok(builder.build())
    }

    /// Parse a JSON object of `identifier -> record`, keeping key order.
    pub fn from_json(text: &str) -> Result<Self> {
        let source: CatalogSource = serde_json::from_str(text)?;
        source.into_catalog()
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Catalog::from_json(&text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ApiDetails> {
        self.entries.get(id)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ApiDetails)> {
        self.entries.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Accumulates entries, rejecting anything the emitters could not render.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: OrderedMap<ApiDetails>,
}

impl CatalogBuilder {
    /// Append one record. Fails on a malformed identifier or help link, and
    /// on an identifier that is already present.
    pub fn insert(&mut self, id: impl Into<String>, details: ApiDetails) -> Result<&mut Self> {
        let id = id.into();
        if !RE_IDENTIFIER.is_match(&id) {
            return Err(Error::InvalidIdentifier(id));
        }
        if let Some(link) = &details.help_link {
            if !RE_HELP_LINK.is_match(link) {
                return Err(Error::InvalidHelpLink {
                    id,
                    link: link.clone(),
                });
            }
        }
        if !details.is_informative() {
            warn!(%id, "record has no description, remarks, return value, fields or parameters");
        }
        debug!(%id, "adding catalog entry");
        self.entries
            .try_insert(id, details)
            .map_err(Error::DuplicateIdentifier)?;
        Ok(self)
    }

    pub fn build(self) -> Catalog {
        Catalog {
            entries: self.entries,
        }
    }
}

fn details_from_decl(decl: &hosting::ApiDecl) -> Result<ApiDetails> {
    let table = |pairs: &[(&str, &str)]| -> Result<Option<OrderedMap<String>>> {
        if pairs.is_empty() {
            return Ok(None);
        }
        let mut map = OrderedMap::new();
        for (name, text) in pairs {
            map.try_insert(*name, (*text).to_string())
                .map_err(|name| Error::DuplicateIdentifier(format!("{}.{}", decl.id, name)))?;
        }
        Ok(Some(map))
    };
    Ok(ApiDetails {
        help_link: Some(decl.help_link.to_string()),
        description: decl.description.map(str::to_string),
        remarks: decl.remarks.map(str::to_string),
        return_value: decl.return_value.map(str::to_string),
        fields: table(decl.fields)?,
        parameters: table(decl.parameters)?,
    })
}

/// Raw `(identifier, record)` pairs as they appear in the input, duplicates
/// included, so the builder can report them by name.
pub(crate) struct CatalogSource(Vec<(String, ApiDetails)>);

impl CatalogSource {
    pub(crate) fn into_catalog(self) -> Result<Catalog> {
        let mut builder = Catalog::builder();
        for (id, details) in self.0 {
            builder.insert(id, details)?;
        }
        Ok(builder.build())
    }
}

impl<'de> Deserialize<'de> for CatalogSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogSourceVisitor)
    }
}

struct CatalogSourceVisitor;

impl<'de> Visitor<'de> for CatalogSourceVisitor {
    type Value = CatalogSource;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of API identifiers to documentation records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0).min(PREALLOC_LIMIT));
        while let Some(pair) = access.next_entry::<String, ApiDetails>()? {
            pairs.push(pair);
        }
        Ok(CatalogSource(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(url: &str, description: &str) -> ApiDetails {
        ApiDetails {
            help_link: Some(url.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn hosting_catalog_builds() {
        let catalog = Catalog::hosting().unwrap();
        assert_eq!(catalog.len(), hosting::HOSTING_API.len());
        assert_eq!(catalog.len(), 18);
    }

    #[test]
    fn hosting_catalog_keeps_declaration_order() {
        let catalog = Catalog::hosting().unwrap();
        let ids: Vec<_> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.first(), Some(&"get_hostfxr_parameters"));
        assert_eq!(ids[1], "get_hostfxr_path");
        assert_eq!(
            ids.last(),
            Some(&"hostfxr_resolve_frameworks_for_runtime_config_fn")
        );
    }

    #[test]
    fn hosting_records_carry_links_and_text() {
        let catalog = Catalog::hosting().unwrap();
        let path = catalog.get("get_hostfxr_path").unwrap();
        assert_eq!(
            path.help_link.as_deref(),
            Some("https://github.com/dotnet/runtime/blob/release/10.0/src/native/corehost/nethost/nethost.h#L66-L94")
        );
        let params: Vec<_> = path.parameters.as_ref().unwrap().keys().collect();
        assert_eq!(params, ["buffer", "buffer_size", "get_hostfxr_parameters"]);

        let parameters = catalog.get("get_hostfxr_parameters").unwrap();
        assert!(parameters.parameters.is_none());
        assert_eq!(parameters.fields.as_ref().unwrap().len(), 3);

        let delegate = catalog.get("hostfxr_get_runtime_delegate_fn").unwrap();
        assert!(delegate
            .remarks
            .as_deref()
            .unwrap()
            .contains("<br/>\n    hdt_get_function_pointer\n</list>"));
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let mut builder = Catalog::builder();
        builder.insert("hostfxr_close_fn", linked("https://x/a", "first")).unwrap();
        let err = builder
            .insert("hostfxr_close_fn", linked("https://x/b", "second"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentifier(ref id) if id == "hostfxr_close_fn"));
    }

    #[test]
    fn dotted_identifiers_are_accepted() {
        let mut builder = Catalog::builder();
        builder
            .insert("get_hostfxr_parameters.size", linked("https://x/y", "size"))
            .unwrap();
        assert_eq!(builder.build().len(), 1);
    }

    #[test]
    fn identifiers_the_remap_line_can_carry_are_accepted() {
        let mut builder = Catalog::builder();
        for id in ["a..b", "Foo.Bar<T>", "ünï.côde", "1abc", "a::b"] {
            builder.insert(id, linked("https://x/y", "d")).unwrap();
        }
        assert_eq!(builder.build().len(), 5);
    }

    #[test]
    fn malformed_identifiers_are_rejected() {
        for id in ["", "a=b", "a\"b", "a\nb", "a\rb"] {
            let err = Catalog::builder()
                .insert(id, linked("https://x/y", "d"))
                .map(|_| ())
                .unwrap_err();
            assert!(matches!(err, Error::InvalidIdentifier(_)), "accepted `{id}`");
        }
    }

    #[test]
    fn relative_or_quoted_links_are_rejected() {
        for link in ["nethost.h#L1", "", "https://x/\"y\"", "https://x y"] {
            let err = Catalog::builder()
                .insert("api", linked(link, "d"))
                .map(|_| ())
                .unwrap_err();
            assert!(matches!(err, Error::InvalidHelpLink { .. }), "accepted `{link}`");
        }
    }

    #[test]
    fn record_without_link_is_accepted() {
        let mut builder = Catalog::builder();
        builder
            .insert(
                "api",
                ApiDetails {
                    description: Some("no link".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(builder.build().get("api").unwrap().help_link.is_none());
    }

    #[test]
    fn json_catalog_keeps_order() {
        let catalog = Catalog::from_json(
            r#"{
                "zeta": {"HelpLink": "https://x/z", "Description": "z"},
                "alpha.beta": {"HelpLink": "https://x/a", "Fields": {"size": "s"}}
            }"#,
        )
        .unwrap();
        let ids: Vec<_> = catalog.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["zeta", "alpha.beta"]);
    }

    #[test]
    fn json_duplicate_identifier_is_reported_by_name() {
        let err = Catalog::from_json(
            r#"{"foo": {"Description": "a"}, "foo": {"Description": "b"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentifier(ref id) if id == "foo"));
    }

    #[test]
    fn json_syntax_error_is_a_format_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::CatalogFormat(_)));
    }
}
