//! Keep/drop decisions.
//!
//! Drop rules run first and are final. Keep rules restrict independently by
//! namespace and by kind; a resource must pass every active keep rule.
//! Cluster-scoped resources have no namespace to test and are never dropped
//! by a keep-namespace rule alone.

use crate::config::Config;
use crate::resource::Resource;

pub fn should_drop(r: &Resource, config: &Config) -> bool {
    let kind = r.kind.to_lowercase();
    let namespace = r.namespace.to_lowercase();

    if config.drop_namespaces.contains(&namespace) {
        return true;
    }
    if config.drop_kinds.contains(&kind) {
        return true;
    }

    let keep_namespace_set = !config.keep_namespaces.is_empty();
    let keep_kind_set = !config.keep_kinds.is_empty();
    let found_namespace = config.keep_namespaces.contains(&namespace);
    let found_kind = config.keep_kinds.contains(&kind);

    if keep_namespace_set && !found_namespace && !namespace.is_empty() {
        return true;
    }

    keep_kind_set && !found_kind
}
