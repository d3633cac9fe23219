#![allow(non_snake_case)]

use super::*;
use test_case::test_case;
use wrapgen_core::TypeInfo;

fn enum_hierarchy() -> TypeHierarchy {
    TypeHierarchy::new()
        .with_type("java.lang.Enum", TypeInfo::new(OBJECT_ROOT))
        .with_type(
            "net.minecraft.server.EnumChatFormat",
            TypeInfo::new("java.lang.Enum"),
        )
        .with_type(
            "net.minecraft.server.EnumDifficulty",
            TypeInfo::new("java.lang.Enum"),
        )
        .with_type("net.minecraft.server.Unrelated", TypeInfo::new(OBJECT_ROOT))
        .with_type(
            "net.minecraft.server.ItemStackSubclass",
            TypeInfo::new("net.minecraft.server.ItemStack"),
        )
}

#[test]
fn ModifierCatalog___builtin___loads() {
    let catalog = ModifierCatalog::builtin().unwrap();

    assert!(catalog.len() > 40);
    assert_eq!(catalog.get("int").unwrap().accessor, "getIntegers()");
}

#[test_case("net.minecraft.server.Block" ; "block")]
#[test_case("net.minecraft.server.BlockPosition" ; "block position")]
#[test_case("net.minecraft.server.IChatBaseComponent" ; "component")]
#[test_case("net.minecraft.server.IChatBaseComponent[]" ; "component array")]
#[test_case("net.minecraft.server.ChunkCoordIntPair" ; "chunk coordinates")]
#[test_case("net.minecraft.server.DataWatcher" ; "data watcher")]
#[test_case("com.mojang.authlib.GameProfile" ; "game profile")]
#[test_case("net.minecraft.server.ServerPing" ; "server ping")]
fn ModifierCatalog___builtin___wrapper_entries(runtime_type: &str) {
    let catalog = ModifierCatalog::builtin().unwrap();

    assert!(catalog.get(runtime_type).unwrap().wrapper);
}

#[test]
fn ModifierCatalog___builtin___primitives_are_not_wrappers() {
    let catalog = ModifierCatalog::builtin().unwrap();

    assert!(!catalog.get("int").unwrap().wrapper);
    assert!(!catalog.get("java.lang.String").unwrap().wrapper);
}

#[test_case("java.util.List", "List<WrappedWatchableObject>", "getWatchableCollectionModifier()" ; "list")]
#[test_case("java.util.Map", "Map<WrappedStatistic, Integer>", "getStatisticMaps()" ; "map")]
fn ModifierCatalog___builtin___collection_entries(runtime_type: &str, output_type: &str, accessor: &str) {
    let catalog = ModifierCatalog::builtin().unwrap();

    let modifier = catalog.get(runtime_type).unwrap();

    assert_eq!(modifier.output_type, output_type);
    assert_eq!(modifier.accessor, accessor);
    assert!(!modifier.wrapper);
}

#[test]
fn resolve_modifier___registered_type___returns_own_entry() {
    let catalog = ModifierCatalog::builtin().unwrap();
    let hierarchy = enum_hierarchy();

    let modifier = resolve_modifier(&catalog, &hierarchy, "net.minecraft.server.EnumDifficulty");

    assert_eq!(modifier.unwrap().output_type, "Difficulty");
}

#[test]
fn resolve_modifier___unregistered_subtype___returns_ancestor_entry() {
    let catalog = ModifierCatalog::builtin().unwrap();
    let hierarchy = enum_hierarchy();

    let modifier = resolve_modifier(&catalog, &hierarchy, "net.minecraft.server.EnumChatFormat");

    assert_eq!(modifier.unwrap().runtime_type, "java.lang.Enum");
}

#[test]
fn resolve_modifier___immediate_superclass_registered___returns_superclass_entry() {
    let catalog = ModifierCatalog::builtin().unwrap();
    let hierarchy = enum_hierarchy();

    let modifier = catalog.lookup(&hierarchy, "net.minecraft.server.ItemStackSubclass");

    assert_eq!(modifier.unwrap().accessor, "getItemModifier()");
}

#[test]
fn resolve_modifier___root_adjacent_unregistered___not_found() {
    let catalog = ModifierCatalog::builtin().unwrap();
    let hierarchy = enum_hierarchy();

    let modifier = resolve_modifier(&catalog, &hierarchy, "net.minecraft.server.Unrelated");

    assert!(modifier.is_none());
}

#[test]
fn resolve_modifier___never_matches_root_entry() {
    let catalog = ModifierCatalog::from_entries([ModifierDescriptor::new(
        OBJECT_ROOT,
        "Object",
        "getModifier()",
    )])
    .unwrap();
    let hierarchy = enum_hierarchy();

    assert!(resolve_modifier(&catalog, &hierarchy, "net.minecraft.server.Unrelated").is_none());
    assert!(resolve_modifier(&catalog, &hierarchy, OBJECT_ROOT).is_none());
}

#[test]
fn resolve_modifier___unregistered_array___not_found() {
    let catalog = ModifierCatalog::builtin().unwrap();

    assert!(resolve_modifier(&catalog, &TypeHierarchy::new(), "long[]").is_none());
}

#[test]
fn ModifierCatalog___from_entries___rejects_duplicates() {
    let result = ModifierCatalog::from_entries([
        ModifierDescriptor::new("java.util.List", "List<ItemStack>", "getItemListModifier()"),
        ModifierDescriptor::new("java.util.List", "List<BlockPosition>", "getBlockPositionCollectionModifier()"),
    ]);

    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateEntry("java.util.List".into())
    );
}

#[test]
fn ModifierCatalog___from_entries___rejects_blank_accessor() {
    let result = ModifierCatalog::from_entries([ModifierDescriptor::new("int", "int", " ")]);

    assert!(matches!(
        result,
        Err(CatalogError::EmptyValue { field: "accessor", .. })
    ));
}

#[test]
fn ModifierCatalog___from_toml_str___wrapper_defaults_false() {
    let catalog = ModifierCatalog::from_toml_str(
        r#"
[[modifier]]
runtime_type = "int"
output_type = "int"
accessor = "getIntegers()"
"#,
    )
    .unwrap();

    assert!(!catalog.get("int").unwrap().wrapper);
}

#[test]
fn ModifierCatalog___from_toml_str___malformed() {
    let result = ModifierCatalog::from_toml_str("[[modifier]]\nruntime_type = 3");

    assert!(matches!(result, Err(CatalogError::Malformed(_))));
}

#[test]
fn ModifierCatalog___from_file___missing_is_malformed() {
    let dir = tempfile::tempdir().unwrap();

    let result = ModifierCatalog::from_file(dir.path().join("none.toml"));

    assert!(matches!(result, Err(CatalogError::Malformed(_))));
}

#[test_case("int", true)]
#[test_case("FLOAT", true)]
#[test_case("double", false)]
#[test_case("byte", false)]
fn ModifierDescriptor___is_widening_numeric(output_type: &str, expected: bool) {
    let modifier = ModifierDescriptor::new("x", output_type, "getX()");

    assert_eq!(modifier.is_widening_numeric(), expected);
}
