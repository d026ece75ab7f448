//! Member-remap response file for the documentation-attribute generator.
//!
//! ```text
//! --memberRemap
//! get_hostfxr_path=[Documentation("https://github.com/.../nethost.h#L66-L94")]
//! ```
//!
//! Every line ends in `\n` regardless of platform. A record without a help
//! link still gets its line, with the attribute argument left out.

use crate::catalog::Catalog;
use crate::emit::Emitter;
use crate::error::Result;
use crate::model::ApiDetails;

/// First line; switches the consumer into remap mode.
pub const MARKER: &str = "--memberRemap";

pub struct RemapEmitter;

impl Emitter for RemapEmitter {
    fn encode(&self, catalog: &Catalog) -> Result<Vec<u8>> {
        Ok(render(catalog).into_bytes())
    }

    fn artifact(&self) -> &str {
        "remap"
    }
}

/// Marker line followed by one line per catalog entry, in catalog order.
pub fn lines(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::with_capacity(catalog.len() + 1);
    lines.push(MARKER.to_string());
    lines.extend(catalog.iter().map(|(id, details)| remap_line(id, details)));
    lines
}

pub fn render(catalog: &Catalog) -> String {
    let mut out = String::new();
    for line in lines(catalog) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn remap_line(id: &str, details: &ApiDetails) -> String {
    let member = scoped_name(id);
    match &details.help_link {
        Some(link) => format!("{}=[Documentation(\"{}\")]", member, link),
        None => format!("{}=[Documentation]", member),
    }
}

/// `outer.inner` → `outer::inner`
pub fn scoped_name(id: &str) -> String {
    id.replace('.', "::")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked(url: &str) -> ApiDetails {
        ApiDetails {
            help_link: Some(url.to_string()),
            description: Some("d".into()),
            ..Default::default()
        }
    }

    #[test]
    fn dots_become_scope_separators() {
        assert_eq!(scoped_name("foo.bar"), "foo::bar");
        assert_eq!(scoped_name("a.b_c.d9"), "a::b_c::d9");
        assert_eq!(scoped_name("hostfxr_close_fn"), "hostfxr_close_fn");
        assert_eq!(scoped_name("a..b"), "a::::b");
        assert_eq!(scoped_name("Foo.Bar<T>"), "Foo::Bar<T>");
    }

    #[test]
    fn line_with_link() {
        assert_eq!(
            remap_line("foo.bar", &linked("https://x/y")),
            "foo::bar=[Documentation(\"https://x/y\")]"
        );
    }

    #[test]
    fn line_without_link_drops_the_argument() {
        let details = ApiDetails {
            description: Some("no link".into()),
            ..Default::default()
        };
        assert_eq!(remap_line("a.b", &details), "a::b=[Documentation]");
    }

    #[test]
    fn one_line_per_entry_plus_marker() {
        let mut builder = Catalog::builder();
        builder.insert("zeta", linked("https://x/z")).unwrap();
        builder
            .insert(
                "alpha.beta",
                ApiDetails {
                    description: Some("unlinked".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        builder.insert("mid", linked("https://x/m")).unwrap();

        let text = render(&builder.build());
        assert_eq!(
            text,
            "--memberRemap\n\
             zeta=[Documentation(\"https://x/z\")]\n\
             alpha::beta=[Documentation]\n\
             mid=[Documentation(\"https://x/m\")]\n"
        );
    }

    #[test]
    fn empty_catalog_is_just_the_marker() {
        assert_eq!(render(&Catalog::builder().build()), "--memberRemap\n");
    }

    #[test]
    fn hosting_catalog_lines() {
        let catalog = Catalog::hosting().unwrap();
        let lines = lines(&catalog);
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], MARKER);
        assert_eq!(
            lines[1],
            "get_hostfxr_parameters=[Documentation(\"https://github.com/dotnet/runtime/blob/release/10.0/src/native/corehost/nethost/nethost.h#L44-L64\")]"
        );
        assert_eq!(
            lines[18],
            "hostfxr_resolve_frameworks_for_runtime_config_fn=[Documentation(\"https://github.com/dotnet/runtime/blob/release/10.0/src/native/corehost/hostfxr.h#L395-L421\")]"
        );
    }
}
