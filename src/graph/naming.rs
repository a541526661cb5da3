//! Vertex names and edge labels.
//!
//! Resource vertices are named `<namespace>/<kind>/<name>` (or `<kind>/<name>`
//! when cluster-scoped), with the kind lower-cased. Origin vertices are named
//! after the file, or the generator that produced the resource.

use crate::resource::{Origin, Resource};

pub fn vertex_name_from_resource(r: &Resource) -> String {
    let kind = r.kind.to_lowercase();

    if r.namespace.is_empty() {
        format!("{}/{}", kind, r.name)
    } else {
        format!("{}/{}/{}", r.namespace, kind, r.name)
    }
}

/// `configuredIn` wins over `repo`; both win over a plain local path.
pub fn vertex_name_from_origin(origin: &Origin) -> String {
    if !origin.configured_in.is_empty() {
        // Generator or transformer
        return origin.configured_in.clone();
    }

    // Remote and local resources are both named by path; the repo only
    // shows up on the edge.
    origin.display_path().to_string()
}

pub fn edge_label_from_origin(origin: &Origin) -> String {
    if !origin.configured_in.is_empty() {
        let by = &origin.configured_by;
        return format!("{}/{}", by.api_version, by.kind);
    }

    if !origin.repo.is_empty() {
        if origin.git_ref.is_empty() {
            return origin.repo.clone();
        }
        return format!("{} (ref {})", origin.repo, origin.git_ref);
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ConfiguredBy;
    use pretty_assertions::assert_eq;

    fn origin(path: &str, repo: &str, git_ref: &str) -> Origin {
        Origin {
            path: path.to_string(),
            repo: repo.to_string(),
            git_ref: git_ref.to_string(),
            ..Origin::default()
        }
    }

    #[test]
    fn resource_names() {
        let ns = Resource::new("Namespace", "", "default");
        assert_eq!(vertex_name_from_resource(&ns), "namespace/default");

        let cm = Resource::new("ConfigMap", "default", "kustomize-dot");
        assert_eq!(vertex_name_from_resource(&cm), "default/configmap/kustomize-dot");
    }

    #[test]
    fn resource_names_keep_namespace_case() {
        let r = Resource::new("ConfigMap", "Team-A", "Settings");
        assert_eq!(vertex_name_from_resource(&r), "Team-A/configmap/Settings");
    }

    #[test]
    fn origin_names_and_labels() {
        let generated = Origin {
            path: "foo.yaml".to_string(),
            configured_in: "foo".to_string(),
            configured_by: ConfiguredBy {
                api_version: "v1".to_string(),
                kind: "my-generator".to_string(),
                ..ConfiguredBy::default()
            },
            ..Origin::default()
        };

        let cases = [
            ("local resource", origin("foo.yaml", "", ""), "foo.yaml", ""),
            ("generator / transformer created resource", generated, "foo", "v1/my-generator"),
            (
                "remote resource without ref",
                origin("foo.yaml", "github.com/dnaeon/kustomize-dot", ""),
                "foo.yaml",
                "github.com/dnaeon/kustomize-dot",
            ),
            (
                "remote resource with ref",
                origin("foo.yaml", "github.com/dnaeon/kustomize-dot", "v1"),
                "foo.yaml",
                "github.com/dnaeon/kustomize-dot (ref v1)",
            ),
        ];

        for (desc, origin, want_vertex, want_label) in cases {
            assert_eq!(vertex_name_from_origin(&origin), want_vertex, "{desc}");
            assert_eq!(edge_label_from_origin(&origin), want_label, "{desc}");
        }
    }

    #[test]
    fn configured_in_wins_over_repo() {
        let o = Origin {
            path: "foo.yaml".to_string(),
            repo: "github.com/x/y".to_string(),
            git_ref: "v1".to_string(),
            configured_in: "kustomization.yaml".to_string(),
            configured_by: ConfiguredBy {
                api_version: "builtin".to_string(),
                kind: "HelmChartInflationGenerator".to_string(),
                ..ConfiguredBy::default()
            },
        };

        assert_eq!(vertex_name_from_origin(&o), "kustomization.yaml");
        assert_eq!(edge_label_from_origin(&o), "builtin/HelmChartInflationGenerator");
    }

    #[test]
    fn not_cloned_prefix_is_stripped() {
        let remote = origin("notCloned/deploy/app.yaml", "github.com/x/y", "main");
        assert_eq!(vertex_name_from_origin(&remote), "deploy/app.yaml");

        let local = origin("notCloned/app.yaml", "", "");
        assert_eq!(vertex_name_from_origin(&local), "app.yaml");
    }

    #[test]
    fn empty_origin() {
        let o = Origin::default();
        assert_eq!(vertex_name_from_origin(&o), "");
        assert_eq!(edge_label_from_origin(&o), "");
    }
}
