//! Sparse fieldsets over response DTOs.
//!
//! A caller may ask for a subset of a resource's fields (`?fields=id,nome`).
//! Each DTO publishes an allow-list pairing every public field name with a
//! function copying that field from a full record into an empty one.

/// Field name and the function copying it from `source` into `target`.
pub type FieldCopier<T> = (&'static str, fn(&T, &mut T));

/// DTOs that can be narrowed to a subset of their fields.
pub trait SparseFields: Default + 'static {
    /// Every field name a caller may request.
    const FIELDS: &'static [FieldCopier<Self>];

    fn field_copier(name: &str) -> Option<fn(&Self, &mut Self)> {
        Self::FIELDS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, copy)| *copy)
    }
}

/// Narrows each item to the requested fields, keeping length and order.
///
/// An empty `fields` returns `items` untouched. Unknown names are skipped, so
/// a request made only of unknown names yields empty records.
pub fn project<T: SparseFields>(items: Vec<T>, fields: &[String]) -> Vec<T> {
    if fields.is_empty() {
        return items;
    }

    let copiers: Vec<fn(&T, &mut T)> = fields
        .iter()
        .filter_map(|name| T::field_copier(name))
        .collect();

    items
        .iter()
        .map(|source| {
            let mut sparse = T::default();
            for copy in &copiers {
                copy(source, &mut sparse);
            }
            sparse
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Pair {
        left: Option<i32>,
        right: Option<String>,
    }

    impl SparseFields for Pair {
        const FIELDS: &'static [FieldCopier<Self>] = &[
            ("left", |src, dst| dst.left = src.left),
            ("right", |src, dst| dst.right.clone_from(&src.right)),
        ];
    }

    fn pairs() -> Vec<Pair> {
        vec![
            Pair {
                left: Some(1),
                right: Some("a".to_string()),
            },
            Pair {
                left: Some(2),
                right: Some("b".to_string()),
            },
        ]
    }

    fn names(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn empty_field_list_returns_items_unchanged() {
        assert_eq!(project(pairs(), &[]), pairs());
    }

    #[test]
    fn selected_fields_are_copied_in_order() {
        let projected = project(pairs(), &names(&["right"]));

        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0], Pair { left: None, right: Some("a".to_string()) });
        assert_eq!(projected[1], Pair { left: None, right: Some("b".to_string()) });
    }

    #[test]
    fn full_field_set_is_identity() {
        assert_eq!(project(pairs(), &names(&["left", "right"])), pairs());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let projected = project(pairs(), &names(&["xyz", "left"]));
        assert_eq!(projected[0], Pair { left: Some(1), right: None });

        let only_unknown = project(pairs(), &names(&["xyz"]));
        assert_eq!(only_unknown, vec![Pair::default(), Pair::default()]);
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert!(Pair::field_copier("left").is_some());
        assert!(Pair::field_copier("LEFT").is_none());
    }

    #[test]
    fn allow_list_is_a_static_table() {
        let table: &'static [FieldCopier<Pair>] = Pair::FIELDS;
        let known: Vec<&str> = table.iter().map(|(name, _)| *name).collect();

        assert_eq!(known, vec!["left", "right"]);
    }
}
