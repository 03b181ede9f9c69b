//! Poet records and the append-only roster that holds them.

use serde::{Deserialize, Serialize};

/// The loves of a poet. Either exactly one or exactly two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loves {
    WithOneLove(String),
    WithTwoLoves { first: String, second: String },
}

impl Loves {
    pub fn first(&self) -> &str {
        match self {
            Self::WithOneLove(love) => love,
            Self::WithTwoLoves { first, .. } => first,
        }
    }

    pub fn second(&self) -> Option<&str> {
        match self {
            Self::WithOneLove(_) => None,
            Self::WithTwoLoves { second, .. } => Some(second),
        }
    }
}

/// One validated entry. Immutable once built; only validation builds it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RecordShape", try_from = "RecordShape")]
pub struct PoetRecord {
    name: String,
    era: String,
    loves: Loves,
}

impl PoetRecord {
    pub(crate) fn new(name: String, era: String, loves: Loves) -> Self {
        Self { name, era, loves }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn era(&self) -> &str {
        &self.era
    }

    pub fn loves(&self) -> &Loves {
        &self.loves
    }

    pub fn first_love(&self) -> &str {
        self.loves.first()
    }

    pub fn second_love(&self) -> Option<&str> {
        self.loves.second()
    }
}

/// Wire shape of a record, same keys as the objects the page pushes.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordShape {
    name: String,
    era: String,
    first_love: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    second_love: Option<String>,
}

impl From<PoetRecord> for RecordShape {
    fn from(record: PoetRecord) -> Self {
        let (first_love, second_love) = match record.loves {
            Loves::WithOneLove(love) => (love, None),
            Loves::WithTwoLoves { first, second } => (first, Some(second)),
        };
        Self {
            name: record.name,
            era: record.era,
            first_love,
            second_love,
        }
    }
}

impl TryFrom<RecordShape> for PoetRecord {
    type Error = String;

    fn try_from(shape: RecordShape) -> Result<Self, Self::Error> {
        if shape.name.is_empty() || shape.era.is_empty() || shape.first_love.is_empty() {
            return Err("record has an empty required field".to_string());
        }
        let loves = match shape.second_love {
            None => Loves::WithOneLove(shape.first_love),
            Some(second) if second.is_empty() => {
                return Err("record has an empty second love".to_string());
            }
            Some(second) => Loves::WithTwoLoves {
                first: shape.first_love,
                second,
            },
        };
        Ok(Self::new(shape.name, shape.era, loves))
    }
}

/// Append-only, insertion-ordered list of records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<PoetRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its index.
    pub fn push(&mut self, record: PoetRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PoetRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PoetRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[PoetRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PoetRecord;
    type IntoIter = std::slice::Iter<'a, PoetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petofi() -> PoetRecord {
        PoetRecord::new(
            "Petőfi".to_string(),
            "Romantic".to_string(),
            Loves::WithOneLove("Júlia".to_string()),
        )
    }

    fn ady() -> PoetRecord {
        PoetRecord::new(
            "Ady".to_string(),
            "Nyugat".to_string(),
            Loves::WithTwoLoves {
                first: "Léda".to_string(),
                second: "Csinszka".to_string(),
            },
        )
    }

    #[test]
    fn one_love_serializes_without_second_love_key() {
        let json = serde_json::to_value(petofi()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Petőfi", "era": "Romantic", "firstLove": "Júlia"})
        );
    }

    #[test]
    fn two_loves_serialize_both() {
        let json = serde_json::to_value(ady()).unwrap();
        assert_eq!(json["firstLove"], "Léda");
        assert_eq!(json["secondLove"], "Csinszka");
    }

    #[test]
    fn deserialize_rejects_empty_second_love() {
        let result: Result<PoetRecord, _> = serde_json::from_str(
            r#"{"name":"A","era":"B","firstLove":"C","secondLove":""}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn roster_keeps_insertion_order() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.push(petofi()), 0);
        assert_eq!(roster.push(ady()), 1);
        assert_eq!(roster.push(petofi()), 2);

        let names: Vec<_> = roster.iter().map(PoetRecord::name).collect();
        assert_eq!(names, ["Petőfi", "Ady", "Petőfi"]);
        assert_eq!(roster.get(1).and_then(PoetRecord::second_love), Some("Csinszka"));
    }
}
