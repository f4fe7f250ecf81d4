mod argument_value;
mod enum_literal;
mod variable_ref;

pub use argument_value::ArgumentValue;
pub use enum_literal::EnumLiteral;
pub use variable_ref::VariableRef;
