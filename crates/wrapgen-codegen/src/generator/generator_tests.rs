#![allow(non_snake_case)]

use super::*;
use crate::scanner::Instruction;
use std::path::PathBuf;
use wrapgen_core::{Category, Direction, FieldDecl, OBJECT_ROOT, TypeInfo};

const SPAWN: &str = "net.minecraft.server.PacketPlayOutSpawnEntity";
const KEEP_ALIVE: &str = "net.minecraft.server.PacketPlayInKeepAlive";

fn spawn_key() -> MessageKey {
    MessageKey::new(Category::Play, Direction::Server, 0x00)
}

fn keep_alive_key() -> MessageKey {
    MessageKey::new(Category::Play, Direction::Client, 0x10)
}

fn hierarchy() -> TypeHierarchy {
    TypeHierarchy::new()
        .with_type(
            SPAWN,
            TypeInfo::new(OBJECT_ROOT)
                .with_field(FieldDecl::new("a", "int"))
                .with_field(FieldDecl::new("b", "java.util.UUID")),
        )
        .with_type(
            KEEP_ALIVE,
            TypeInfo::new(OBJECT_ROOT).with_field(FieldDecl::new("a", "long")),
        )
}

fn registry() -> MessageRegistry {
    MessageRegistry::new()
        .with_message(MessageType::new(spawn_key(), "SPAWN_ENTITY"))
        .unwrap()
        .with_message(MessageType::new(keep_alive_key(), "KEEP_ALIVE"))
        .unwrap()
}

fn generator() -> WrapperGenerator {
    WrapperGenerator::from_config(GeneratorConfig::default(), hierarchy(), registry()).unwrap()
}

fn spawn_method() -> MethodBody {
    MethodBody {
        declaring_type: SPAWN.into(),
        name: "b".into(),
        instructions: vec![
            Instruction::line(1),
            Instruction::get_field(SPAWN, "a"),
            Instruction::line(2),
            Instruction::get_field(SPAWN, "b"),
        ],
    }
}

fn spawn_docs() -> Vec<DocField> {
    vec![
        DocField::new("Entity ID", "VarInt", ""),
        DocField::new("Object UUID", "UUID", ""),
    ]
}

#[test]
fn WrapperGenerator___generate___scans_and_emits() {
    let generator = generator();
    let message_type = generator.registry().resolve(&spawn_key()).unwrap().clone();

    let wrapper = generator
        .generate(&message_type, &spawn_method(), &spawn_docs())
        .unwrap();

    assert_eq!(wrapper.class_name, "WrapperPlayServerSpawnEntity");
    assert_eq!(wrapper.file_name(), "WrapperPlayServerSpawnEntity.java");
    assert!(wrapper.source.contains("public int getEntityID() {"));
    assert!(wrapper.source.contains("public UUID getObjectUUID() {"));
    assert!(wrapper.source.contains("return handle.getUUIDs().read(0);"));
}

#[test]
fn WrapperGenerator___generate___unresolved_field___scan_error() {
    let generator = generator();
    let message_type = generator.registry().resolve(&spawn_key()).unwrap().clone();
    let method = MethodBody {
        declaring_type: SPAWN.into(),
        name: "b".into(),
        instructions: vec![Instruction::line(1), Instruction::get_field(SPAWN, "zz")],
    };

    let err = generator.generate(&message_type, &method, &spawn_docs()).unwrap_err();

    assert!(matches!(err, WrapgenError::Scan(ScanError::UnresolvedFieldName { .. })));
    assert!(err.is_fatal());
}

#[test]
fn WrapperGenerator___generate_all___reports_missing_inputs() {
    let generator = generator();
    let methods = BTreeMap::from([(spawn_key(), spawn_method())]);
    let documented = DocumentedFields::from([
        (spawn_key(), spawn_docs()),
        (keep_alive_key(), vec![DocField::new("Keep Alive ID", "Long", "")]),
    ]);

    let results = generator.generate_all(&methods, &documented);

    assert_eq!(results.len(), 2);
    assert!(results[&spawn_key()].is_ok());
    let err = results[&keep_alive_key()].as_ref().unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing serialization method input for PacketType.Play.Client.KEEP_ALIVE"
    );
    assert!(!err.is_fatal());
}

#[test]
fn WrapperGenerator___generate_all___missing_documentation() {
    let generator = generator();
    let methods = BTreeMap::from([(spawn_key(), spawn_method())]);

    let results = generator.generate_all(&methods, &DocumentedFields::new());

    assert!(matches!(
        results[&spawn_key()],
        Err(WrapgenError::MissingInput {
            kind: "documentation",
            ..
        })
    ));
}

#[test]
fn WrapperGenerator___generate_all___matches_sequential_generation() {
    let generator = generator();
    let methods = BTreeMap::from([(spawn_key(), spawn_method())]);
    let documented = DocumentedFields::from([(spawn_key(), spawn_docs())]);
    let message_type = generator.registry().resolve(&spawn_key()).unwrap().clone();

    let results = generator.generate_all(&methods, &documented);
    let single = generator
        .generate(&message_type, &spawn_method(), &spawn_docs())
        .unwrap();

    assert_eq!(results[&spawn_key()].as_ref().unwrap(), &single);
}

#[test]
fn WrapperGenerator___from_config___invalid_config_rejected() {
    let config = GeneratorConfig {
        log_level: "loud".into(),
        ..GeneratorConfig::default()
    };

    let result = WrapperGenerator::from_config(config, hierarchy(), registry());

    assert!(matches!(result, Err(WrapgenError::Config(_))));
}

#[test]
fn WrapperGenerator___from_config___custom_modifier_table() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("modifiers.toml");
    std::fs::write(
        &table,
        "[[modifier]]\nruntime_type = \"int\"\noutput_type = \"int\"\naccessor = \"getIntegers()\"\n",
    )
    .unwrap();
    let config = GeneratorConfig {
        modifier_table: Some(table),
        ..GeneratorConfig::default()
    };

    let generator = WrapperGenerator::from_config(config, hierarchy(), registry()).unwrap();

    assert_eq!(generator.catalog().len(), 1);
}

#[test]
fn WrapperGenerator___from_config___missing_modifier_table() {
    let config = GeneratorConfig {
        modifier_table: Some(PathBuf::from("/nonexistent/modifiers.toml")),
        ..GeneratorConfig::default()
    };

    let result = WrapperGenerator::from_config(config, hierarchy(), registry());

    assert!(matches!(result, Err(WrapgenError::Catalog(_))));
}

#[test]
fn WrapperGenerator___load___reads_all_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("wrapgen.toml");
    let hierarchy_path = dir.path().join("hierarchy.json");
    let registry_path = dir.path().join("registry.toml");
    std::fs::write(&config_path, "class_prefix = \"W\"\n").unwrap();
    std::fs::write(&hierarchy_path, serde_json::to_string(&hierarchy()).unwrap()).unwrap();
    std::fs::write(
        &registry_path,
        "[[message]]\ncategory = \"play\"\ndirection = \"server\"\nid = 0\nname = \"SPAWN_ENTITY\"\n",
    )
    .unwrap();

    let generator =
        WrapperGenerator::load(Some(&config_path), &hierarchy_path, &registry_path).unwrap();

    assert_eq!(generator.config().class_prefix, "W");
    assert_eq!(generator.registry().len(), 1);
    assert!(generator.hierarchy().contains(SPAWN));
}

#[test]
fn WrapperGenerator___load___missing_hierarchy_has_context() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = dir.path().join("registry.toml");
    std::fs::write(&registry_path, "").unwrap();

    let err = WrapperGenerator::load(None, &dir.path().join("none.json"), &registry_path)
        .err()
        .unwrap();

    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn WrapperGenerator___load_document___parses_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("protocol.json");
    std::fs::write(&path, r#"{ "sections": [{ "heading": "Play" }] }"#).unwrap();

    let document = WrapperGenerator::load_document(&path).unwrap();

    assert_eq!(document.sections[0].heading, "Play");
}

#[test]
fn WrapperGenerator___parse_document___uses_registry() {
    use crate::document::{Row, Section, Table};

    let generator = generator();
    let document = Document::new(vec![Section::new("Play").with_subsection(
        Section::new("Clientbound").with_table(Table::new(vec![
            Row::header(&["Packet ID", "State", "Bound To", "Field Name", "Field Type", "Notes"]),
            Row::data(&["0x00", "Play", "Client", "Entity ID", "VarInt", ""]),
        ])),
    )]);

    let documented = generator.parse_document(&document);

    assert_eq!(documented[&spawn_key()].len(), 1);
}
