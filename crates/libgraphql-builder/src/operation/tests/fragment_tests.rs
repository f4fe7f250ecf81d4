use crate::operation::FieldInput;
use crate::operation::Fragment;
use crate::operation::OperationKind;
use crate::operation::SelectionNode;

fn image_fragment() -> Fragment {
    Fragment::with("imageFragment", "image", [
        FieldInput::from("height"),
        "width".into(),
        "filename".into(),
        "size".into(),
        ("formats", SelectionNode::new(OperationKind::Query).fields(["id", "name", "url"])).into(),
    ])
}

#[test]
fn renders_sorted_fields_under_type_condition() {
    assert_eq!(
        image_fragment().to_string(),
        "fragment imageFragment on image { filename, formats { id, name, url }, \
        height, size, width }",
    );
}

#[test]
fn alias_is_written_when_it_differs_from_type() {
    let fragment = Fragment::new("userFields", "User")
        .field(("avatar", SelectionNode::query("profilePicture").fields(["url"])));
    assert_eq!(
        fragment.to_string(),
        "fragment userFields on User { avatar: profilePicture { url } }",
    );
}

#[test]
fn spread_token() {
    let fragment = image_fragment();
    assert_eq!(fragment.spread(), "...imageFragment");
    assert_eq!(fragment.name(), "imageFragment");
    assert_eq!(fragment.on_type(), "image");
}

#[test]
fn remove_fields_from_fragment() {
    let fragment = image_fragment().remove_fields(["formats", "size"]);
    assert_eq!(
        fragment.to_string(),
        "fragment imageFragment on image { filename, height, width }",
    );
}

#[test]
fn constructor_and_chained_calls_render_identically() {
    let chained = Fragment::new("imageFragment", "image")
        .fields(["size", "filename"])
        .field(("formats", SelectionNode::new(OperationKind::Query).fields(["url", "name", "id"])))
        .fields(["width", "height"]);
    assert_eq!(chained.to_string(), image_fragment().to_string());
}
