//! Text rendering of a network as straight-line compare-and-swap code.

use crate::comparator::Comparator;
use crate::network::Network;

/// One compare-and-swap statement. Both orientations leave the smaller value
/// on the lower channel, so the statement is written on `(min, max)`.
pub fn comparator_line(c: &Comparator, var: &str) -> String {
    let (i, j) = (c.min_channel(), c.max_channel());
    format!("if {var}[{i}] > {var}[{j}] {{ {var}.swap({i}, {j}); }}")
}

/// One statement per comparator, in network order.
pub fn to_program(net: &Network, var: &str) -> Vec<String> {
    net.iter().map(|c| comparator_line(c, var)).collect()
}

/// A complete generic sorting function for `channels` elements.
pub fn to_function(net: &Network, name: &str, var: &str, channels: usize) -> String {
    let mut out = format!(
        "/// Sorts {channels} elements with {} comparators.\nfn {name}<T: PartialOrd>({var}: &mut [T]) {{\n    assert_eq!({var}.len(), {channels});\n",
        net.size()
    );
    for line in to_program(net, var) {
        out.push_str("    ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(pairs: &[(usize, usize)]) -> Network {
        pairs
            .iter()
            .map(|&(a, b)| Comparator::new(a, b).unwrap())
            .collect()
    }

    #[test]
    fn one_line_per_comparator_in_order() {
        let lines = to_program(&net(&[(0, 1), (1, 2)]), "a");
        assert_eq!(
            lines,
            vec![
                "if a[0] > a[1] { a.swap(0, 1); }",
                "if a[1] > a[2] { a.swap(1, 2); }",
            ]
        );
    }

    #[test]
    fn non_standard_comparators_render_on_min_max() {
        let c = Comparator::new(2, 0).unwrap();
        assert_eq!(comparator_line(&c, "v"), "if v[0] > v[2] { v.swap(0, 2); }");
    }

    #[test]
    fn function_wraps_program() {
        let text = to_function(&net(&[(0, 1)]), "sort2", "v", 2);
        assert!(text.starts_with("/// Sorts 2 elements with 1 comparators.\n"));
        assert!(text.contains("fn sort2<T: PartialOrd>(v: &mut [T]) {"));
        assert!(text.contains("    if v[0] > v[1] { v.swap(0, 1); }\n"));
        assert!(text.ends_with("}\n"));
        assert!(to_program(&Network::empty(), "v").is_empty());
    }
}
