use crate::operation::SelectionNode;
use proptest::prelude::*;

fn names_and_shuffle() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    prop::collection::hash_set("[a-z][a-zA-Z0-9]{0,7}", 1..10)
        .prop_flat_map(|names| {
            let names: Vec<String> = names.into_iter().collect();
            (Just(names.clone()), Just(names).prop_shuffle())
        })
}

proptest! {
    #[test]
    fn fields_render_in_alias_order_regardless_of_insertion(
        (names, shuffled) in names_and_shuffle(),
    ) {
        let a = SelectionNode::query("root").fields(names);
        let b = SelectionNode::query("root").fields(shuffled);
        prop_assert_eq!(a.to_string(), b.to_string());

        let aliases: Vec<&str> = a.field_map().iter_sorted().map(|(alias, _)| alias).collect();
        let mut sorted = aliases.clone();
        sorted.sort();
        prop_assert_eq!(aliases, sorted);
    }

    #[test]
    fn arguments_render_in_name_order_regardless_of_insertion(
        (names, shuffled) in names_and_shuffle(),
    ) {
        let a = SelectionNode::query("root")
            .arguments(names.iter().map(|name| (name.to_owned(), name.len() as i64)));
        let b = SelectionNode::query("root")
            .arguments(shuffled.iter().map(|name| (name.to_owned(), name.len() as i64)));
        prop_assert_eq!(a.to_string(), b.to_string());

        let arg_names: Vec<&str> = a.args().iter_sorted().map(|(name, _)| name).collect();
        let mut sorted = arg_names.clone();
        sorted.sort();
        prop_assert_eq!(arg_names, sorted);
    }
}
