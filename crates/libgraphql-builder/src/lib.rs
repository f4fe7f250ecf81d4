//! Build GraphQL query and mutation documents programmatically.
//!
//! A document is a tree: an [`Operation`](operation::Operation) at the root,
//! [`SelectionNode`](operation::SelectionNode)s for every field that selects
//! sub-fields, and [`Fragment`](operation::Fragment)s that can be spread into
//! any field list. Arguments are [`ArgumentValue`](value::ArgumentValue)s.
//!
//! Arguments and fields are always rendered sorted by name (or alias), so
//! the output does not depend on the order in which the tree was built. The
//! raw text is then handed to a [`Canonicalizer`](canonicalizer::Canonicalizer)
//! which parses it and prints it in its final, indented form.

pub mod canonicalizer;
pub mod operation;
pub mod value;
