use crate::value::EnumLiteral;
use crate::value::VariableRef;
use indexmap::IndexMap;

/// A value passed as an argument to a field in a
/// [`SelectionNode`](crate::operation::SelectionNode).
///
/// The variant is decided once, when the value is converted into an
/// [`ArgumentValue`]. In particular, converting text that starts with `$`
/// produces an [`ArgumentValue::Variable`] while any other text produces an
/// [`ArgumentValue::String`]:
///
/// ```
/// use libgraphql_builder::value::ArgumentValue;
///
/// assert!(matches!(ArgumentValue::from("$id"), ArgumentValue::Variable(_)));
/// assert!(matches!(ArgumentValue::from("id"), ArgumentValue::String(_)));
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ArgumentValue {
    Bool(bool),
    Enum(EnumLiteral),
    Float(f64),
    Int(i64),
    List(Vec<ArgumentValue>),
    Null,
    Object(IndexMap<String, ArgumentValue>),
    String(String),
    Variable(VariableRef),
}
impl ArgumentValue {
    pub fn enum_literal(name: impl Into<String>) -> Self {
        Self::Enum(EnumLiteral::new(name))
    }

    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ArgumentValue>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Build an [`ArgumentValue::Object`]. Entries keep the order in which
    /// they are given here.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ArgumentValue>,
    {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn variable(name: impl AsRef<str>) -> Self {
        Self::Variable(VariableRef::new(name))
    }

    /// Format this value as a GraphQL value literal.
    ///
    /// Lists and objects are formatted in insertion order. Strings are
    /// wrapped in double quotes as-is; their content is trusted.
    ///
    /// Floats always carry a decimal point (`3.0`, `1.0e20`). GraphQL has no
    /// literal for `NaN` or the infinities, so non-finite floats render as
    /// `null`.
    pub fn to_graphql_string(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Enum(literal) => literal.to_string(),
            Self::Float(value) => format_float(*value),
            Self::Int(value) => value.to_string(),
            Self::List(values) => format!(
                "[{}]",
                values.iter()
                    .map(|value| value.to_graphql_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Null => "null".to_string(),
            Self::Object(entries) => format!(
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {}", value.to_graphql_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::String(value) => format!("\"{value}\""),
            Self::Variable(var_ref) => var_ref.to_graphql_string(),
        }
    }
}

fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }

    // `Debug` keeps the fractional part (`3.0`) where `Display` would not,
    // but switches to exponent form (`1e20`) for very large and very small
    // magnitudes.
    let rendered = format!("{value:?}");
    if rendered.contains('.') {
        rendered
    } else if let Some((mantissa, exponent)) = rendered.split_once('e') {
        format!("{mantissa}.0e{exponent}")
    } else {
        format!("{rendered}.0")
    }
}

impl std::fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}

impl std::convert::From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        if value.starts_with('$') {
            Self::Variable(VariableRef::new(value))
        } else {
            Self::String(value.to_string())
        }
    }
}
impl std::convert::From<&String> for ArgumentValue {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}
impl std::convert::From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        if value.starts_with('$') {
            Self::Variable(VariableRef::new(value))
        } else {
            Self::String(value)
        }
    }
}
impl std::convert::From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<EnumLiteral> for ArgumentValue {
    fn from(value: EnumLiteral) -> Self {
        Self::Enum(value)
    }
}
impl std::convert::From<VariableRef> for ArgumentValue {
    fn from(value: VariableRef) -> Self {
        Self::Variable(value)
    }
}

macro_rules! impl_from_int {
    ($($int_ty:ty),+ $(,)?) => {
        $(
            impl std::convert::From<$int_ty> for ArgumentValue {
                fn from(value: $int_ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}
impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl std::convert::From<f32> for ArgumentValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}
impl std::convert::From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<ArgumentValue>> std::convert::From<Option<T>> for ArgumentValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl<T: Into<ArgumentValue>> std::convert::From<Vec<T>> for ArgumentValue {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}
impl<T: Into<ArgumentValue>, const N: usize> std::convert::From<[T; N]> for ArgumentValue {
    fn from(values: [T; N]) -> Self {
        Self::list(values)
    }
}
impl<K, V> std::convert::From<IndexMap<K, V>> for ArgumentValue
where
    K: Into<String>,
    V: Into<ArgumentValue>,
{
    fn from(entries: IndexMap<K, V>) -> Self {
        Self::object(entries)
    }
}
