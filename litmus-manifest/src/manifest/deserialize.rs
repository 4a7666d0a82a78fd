use indexmap::IndexMap;
use litmus_ir::TypeRef;
use serde::{
    Deserialize,
    de::{self, Deserializer, MapAccess, SeqAccess, Visitor},
};
use toml::Spanned;

use super::FieldDef;

/// Field with name field for array format deserialization
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldWithName {
    name: String,
    #[serde(rename = "type")]
    ty: TypeRef,
    description: Option<String>,
    default: Option<toml::Value>,
}

/// Deserialize fields from either array or map format
/// Uses manual Visitor because FieldDef.ty uses Spanned which doesn't work with untagged enums
pub(super) fn deserialize_fields<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, FieldDef>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldsVisitor;

    impl<'de> Visitor<'de> for FieldsVisitor {
        type Value = IndexMap<String, FieldDef>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of fields or an array of fields with name field")
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut map = IndexMap::new();
            while let Some(item) = seq.next_element::<FieldWithName>()? {
                if map.contains_key(&item.name) {
                    return Err(de::Error::custom(format!(
                        "duplicate field '{}'",
                        item.name
                    )));
                }
                map.insert(
                    item.name,
                    FieldDef {
                        // Use empty span for array format (span info not available)
                        ty: Spanned::new(0..0, item.ty),
                        description: item.description,
                        default: item.default,
                    },
                );
            }
            Ok(map)
        }

        fn visit_map<M>(self, map: M) -> std::result::Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            IndexMap::deserialize(de::value::MapAccessDeserializer::new(map))
        }
    }

    deserializer.deserialize_any(FieldsVisitor)
}
