use crate::config::Config;
use crate::graph::Attrs;
use crate::resource::Resource;

/// Paint a resource vertex. Namespace colors are applied first, then kind
/// colors, so a kind highlight overrides a namespace highlight.
pub fn apply_highlight(attrs: &mut Attrs, r: &Resource, config: &Config) {
    let namespace = r.namespace.to_lowercase();
    let kind = r.kind.to_lowercase();

    if let Some(color) = config.highlight_namespaces.get(&namespace) {
        paint(attrs, color);
    }

    if let Some(color) = config.highlight_kinds.get(&kind) {
        paint(attrs, color);
    }
}

fn paint(attrs: &mut Attrs, color: &str) {
    attrs.insert("color".to_string(), color.to_string());
    attrs.insert("fillcolor".to_string(), color.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn colors(attrs: &Attrs) -> (Option<&str>, Option<&str>) {
        (
            attrs.get("color").map(String::as_str),
            attrs.get("fillcolor").map(String::as_str),
        )
    }

    #[test]
    fn no_match_leaves_attrs_untouched() {
        let mut attrs = Attrs::new();
        attrs.insert("shape".to_string(), "box".to_string());

        let config = Config::default()
            .with_highlight_kind("Secret", "red")
            .with_highlight_namespace("kube-system", "blue");
        apply_highlight(&mut attrs, &Resource::new("ConfigMap", "default", "x"), &config);

        assert_eq!(attrs.len(), 1);
        assert_eq!(colors(&attrs), (None, None));
    }

    #[test]
    fn namespace_highlight() {
        let mut attrs = Attrs::new();
        let config = Config::default().with_highlight_namespace("Default", "blue");
        apply_highlight(&mut attrs, &Resource::new("ConfigMap", "default", "x"), &config);
        assert_eq!(colors(&attrs), (Some("blue"), Some("blue")));
    }

    #[test]
    fn kind_highlight_is_case_insensitive() {
        let mut attrs = Attrs::new();
        let config = Config::default().with_highlight_kind("configmap", "red");
        apply_highlight(&mut attrs, &Resource::new("ConfigMap", "", "x"), &config);
        assert_eq!(colors(&attrs), (Some("red"), Some("red")));
    }

    #[test]
    fn kind_wins_over_namespace() {
        let mut attrs = Attrs::new();
        let config = Config::default()
            .with_highlight_kind("ConfigMap", "red")
            .with_highlight_namespace("default", "blue");
        apply_highlight(&mut attrs, &Resource::new("ConfigMap", "default", "x"), &config);
        assert_eq!(colors(&attrs), (Some("red"), Some("red")));
    }
}
