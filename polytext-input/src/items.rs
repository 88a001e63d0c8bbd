//! Item label access and string search over list items.

/// Read access to the labels of a list's items.
pub trait ItemLabels {
    fn item_count(&self) -> usize;
    fn item_label(&self, index: usize) -> Option<&str>;
}

impl ItemLabels for [String] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_label(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl ItemLabels for Vec<String> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_label(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl ItemLabels for [&str] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn item_label(&self, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

fn starts_with_ignore_case(label: &str, prefix: &str) -> bool {
    let mut label = label.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| label.next() == Some(p))
}

/// First item whose label starts with `prefix`, ignoring case.
pub fn find_string<L: ItemLabels + ?Sized>(items: &L, prefix: &str) -> Option<usize> {
    (0..items.item_count()).find(|&i| {
        items
            .item_label(i)
            .is_some_and(|label| starts_with_ignore_case(label, prefix))
    })
}

/// First item whose label equals `text` exactly.
pub fn find_string_exact<L: ItemLabels + ?Sized>(items: &L, text: &str) -> Option<usize> {
    (0..items.item_count()).find(|&i| items.item_label(i) == Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<String> {
        ["apple", "Banana", "blueberry", "Ελιά"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_find_string_case_insensitive() {
        assert_eq!(find_string(&items(), "b"), Some(1));
        assert_eq!(find_string(&items(), "BL"), Some(2));
        assert_eq!(find_string(&items(), "ελ"), Some(3));
        assert_eq!(find_string(&items(), "z"), None);
    }

    #[test]
    fn test_find_string_exact() {
        assert_eq!(find_string_exact(&items(), "Banana"), Some(1));
        assert_eq!(find_string_exact(&items(), "banana"), None);
    }

    #[test]
    fn test_prefix_longer_than_label() {
        assert_eq!(find_string(&items(), "apples"), None);
    }

    #[test]
    fn test_str_slice_labels() {
        let labels: &[&str] = &["one", "two"];
        assert_eq!(find_string(labels, "t"), Some(1));
    }
}
