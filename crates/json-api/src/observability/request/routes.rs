//! Low-cardinality route labels for request metrics.

/// Replace identifier segments so that every product or discount shares one
/// label.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::new();
    let mut previous = "";

    for segment in path.trim_start_matches('/').split('/') {
        label.push('/');

        if previous == "product" {
            label.push_str("{sku}");
        } else if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            label.push_str("{id}");
        } else {
            label.push_str(segment);
        }

        previous = segment;
    }

    label
}
