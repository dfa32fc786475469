use crate::model::Verb;

/// Loads the verb bank from the embedded YAML. Read once at startup,
/// never mutated afterwards.
pub fn read_verbs_embedded() -> Vec<Verb> {
    let file_content = include_str!("data/irregular_verbs.yaml");
    serde_yaml::from_str(file_content).expect("embedded verb bank YAML must parse")
}
