//! Java wrapper class emission
//!
//! The emitter aligns a message's scanned fields with its documented fields
//! and writes one wrapper class. Emission is total: anything that cannot be
//! generated for a field becomes a `// Cannot ...` comment in the output and
//! a warning in the log, and the rest of the class is still produced.

use crate::align::{AlignedField, align_by_index};
use crate::catalog::{ModifierCatalog, ModifierDescriptor};
use crate::naming::{accessor_name, lower_first, to_pascal_case};
use crate::normalize::TypeNormalizer;
use crate::scanner::ScanResult;
use crate::writer::GeneratedSource;
use std::fmt::Write;
use wrapgen_core::{
    DocField, FieldDescriptor, FieldError, GeneratorConfig, MessageType, TypeHierarchy,
};

/// Position of `field` among the memory-order fields sharing its runtime
/// type; this is the index the host's typed accessors use.
pub fn accessor_index(
    memory_order: &[FieldDescriptor],
    field: &FieldDescriptor,
) -> Result<usize, FieldError> {
    memory_order
        .iter()
        .filter(|f| f.runtime_type == field.runtime_type)
        .position(|f| f.declaring_type == field.declaring_type && f.name == field.name)
        .ok_or_else(|| FieldError::NotInMemoryOrder(field.name.clone()))
}

/// Documentation text made safe for a single comment line: whitespace runs
/// collapse to one space and `*/` cannot close the comment.
fn comment_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "*&#47;")
}

/// Declared Java type of an accessor and whether values need a cast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTyping {
    pub declared: String,
    pub cast: bool,
}

/// Everything needed to write the accessors of one aligned field
struct FieldContext<'a> {
    field: &'a FieldDescriptor,
    doc: &'a DocField,
    display_name: &'a str,
    modifier: &'a ModifierDescriptor,
    memory_order: &'a [FieldDescriptor],
}

/// Writes wrapper classes from scanned and documented fields
#[derive(Debug, Clone, Copy)]
pub struct CodeEmitter<'g> {
    catalog: &'g ModifierCatalog,
    hierarchy: &'g TypeHierarchy,
    normalizer: &'g TypeNormalizer,
    config: &'g GeneratorConfig,
}

impl<'g> CodeEmitter<'g> {
    pub fn new(
        catalog: &'g ModifierCatalog,
        hierarchy: &'g TypeHierarchy,
        normalizer: &'g TypeNormalizer,
        config: &'g GeneratorConfig,
    ) -> Self {
        Self {
            catalog,
            hierarchy,
            normalizer,
            config,
        }
    }

    /// `<prefix><Category><Direction><PascalName>`
    pub fn class_name(&self, message_type: &MessageType) -> String {
        format!(
            "{}{}{}{}",
            self.config.class_prefix,
            message_type.key.category.java_name(),
            message_type.key.direction.java_name(),
            to_pascal_case(&message_type.name)
        )
    }

    /// Declared type for a field.
    ///
    /// Wrapper modifiers always declare their own output type. Otherwise
    /// the documented type wins and values are cast when it differs from
    /// the modifier's type, except that `byte`/`short` documentation over
    /// an `int`/`float` modifier keeps the modifier's type uncast.
    pub fn field_typing(&self, modifier: &ModifierDescriptor, doc: &DocField) -> FieldTyping {
        if modifier.wrapper {
            return FieldTyping {
                declared: modifier.output_type.clone(),
                cast: false,
            };
        }

        let normalized = self.normalizer.normalize(&doc.type_text);
        let narrow = normalized.eq_ignore_ascii_case("byte") || normalized.eq_ignore_ascii_case("short");
        if modifier.is_widening_numeric() && narrow {
            return FieldTyping {
                declared: modifier.output_type.clone(),
                cast: false,
            };
        }

        FieldTyping {
            cast: normalized != modifier.output_type,
            declared: normalized,
        }
    }

    /// Source text of the wrapper class for `message_type`
    pub fn emit(&self, message_type: &MessageType, scan: &ScanResult, docs: &[DocField]) -> String {
        let class_name = self.class_name(message_type);
        let mut out = GeneratedSource::new();

        self.write_preamble(&mut out, message_type, &class_name);

        let alignment = align_by_index(&scan.network_order, docs);
        if let Some(mismatch) = alignment.mismatch {
            tracing::warn!(
                message_type = %message_type,
                scanned = mismatch.scanned,
                documented = mismatch.documented,
                "scanned and documented field counts differ"
            );
        }

        for pair in &alignment.pairs {
            self.emit_field(&mut out, message_type, scan, pair);
        }

        for doc in alignment.unmatched_docs {
            out.line(&format!("// Cannot generate field {}", comment_text(doc.label())));
        }

        out.dedent();
        out.line("}");

        tracing::debug!(message_type = %message_type, class = %class_name, "emitted wrapper");
        out.finish()
    }

    fn write_preamble(&self, out: &mut GeneratedSource, message_type: &MessageType, class_name: &str) {
        out.lines(&self.config.license_header);
        out.line(&format!("package {};", self.config.package));
        out.newline();

        for import in &self.config.imports {
            out.line(&format!("import {import};"));
        }
        out.newline();

        out.line(&format!(
            "public class {class_name} extends {} {{",
            self.config.base_class
        ));
        out.newline();
        out.indent();

        out.line(&format!(
            "public static final PacketType TYPE = {};",
            message_type.reference()
        ));
        out.newline();

        out.line(&format!("public {class_name}() {{"));
        out.indent();
        out.line("super(new PacketContainer(TYPE), TYPE);");
        out.line("handle.getModifier().writeDefaults();");
        out.dedent();
        out.line("}");
        out.newline();

        out.line(&format!("public {class_name}(PacketContainer packet) {{"));
        out.indent();
        out.line("super(packet, TYPE);");
        out.dedent();
        out.line("}");
        out.newline();
    }

    fn emit_field(
        &self,
        out: &mut GeneratedSource,
        message_type: &MessageType,
        scan: &ScanResult,
        pair: &AlignedField<'_>,
    ) {
        let field = pair.scan;

        let Some(modifier) = self.catalog.lookup(self.hierarchy, &field.runtime_type) else {
            out.line(&format!("// Cannot find type for {}", field.name));
            tracing::warn!(
                message_type = %message_type,
                field = %field.name,
                runtime_type = %field.runtime_type,
                "cannot find modifier for field type"
            );
            return;
        };

        let Some(display_name) = pair.doc.display_name.as_deref() else {
            tracing::warn!(
                message_type = %message_type,
                index = pair.index,
                runtime_type = %field.runtime_type,
                "undocumented field skipped"
            );
            return;
        };

        let ctx = FieldContext {
            field,
            doc: pair.doc,
            display_name,
            modifier,
            memory_order: &scan.memory_order,
        };

        self.stage(out, message_type, field, "getter", |staged| {
            self.write_getter(staged, &ctx)
        });
        self.stage(out, message_type, field, "setter", |staged| {
            self.write_setter(staged, &ctx)
        });
    }

    /// Render into a scratch buffer and keep the result only on success
    fn stage(
        &self,
        out: &mut GeneratedSource,
        message_type: &MessageType,
        field: &FieldDescriptor,
        kind: &str,
        render: impl FnOnce(&mut GeneratedSource) -> Result<(), FieldError>,
    ) {
        let mut staged = out.scratch();

        match render(&mut staged) {
            Ok(()) => out.append(staged),
            Err(err) => {
                out.line(&format!("// Cannot generate {kind} {}", field.name));
                tracing::warn!(
                    message_type = %message_type,
                    field = %field.name,
                    error = %err,
                    "failed to generate {kind}"
                );
            }
        }
    }

    fn resolve(&self, ctx: &FieldContext<'_>) -> Result<(String, FieldTyping, usize), FieldError> {
        let name = accessor_name(ctx.display_name, &self.config.name_synonyms);
        if name.is_empty() {
            return Err(FieldError::EmptyAccessorName(ctx.display_name.to_string()));
        }

        let typing = self.field_typing(ctx.modifier, ctx.doc);
        if typing.declared.is_empty() {
            return Err(FieldError::EmptyDeclaredType(ctx.field.name.clone()));
        }

        let index = accessor_index(ctx.memory_order, ctx.field)?;
        Ok((name, typing, index))
    }

    fn write_getter(&self, out: &mut GeneratedSource, ctx: &FieldContext<'_>) -> Result<(), FieldError> {
        let (name, typing, index) = self.resolve(ctx)?;
        let cast = if typing.cast {
            format!(" ({})", typing.declared)
        } else {
            String::new()
        };
        let display_name = comment_text(ctx.display_name);
        let note = lower_first(&comment_text(&ctx.doc.notes));

        writeln!(out, "/**")?;
        writeln!(out, " * Retrieve {display_name}.")?;
        if !note.is_empty() {
            writeln!(out, " * <p>")?;
            writeln!(out, " * Notes: {note}")?;
        }
        writeln!(out, " * @return The current {display_name}")?;
        writeln!(out, " */")?;

        writeln!(out, "public {} get{name}() {{", typing.declared)?;
        out.indent();
        writeln!(out, "return{cast} handle.{}.read({index});", ctx.modifier.accessor)?;
        out.dedent();
        writeln!(out, "}}")?;
        out.newline();

        if name.to_lowercase().contains("entityid") {
            write_entity_accessors(out, index)?;
        }

        Ok(())
    }

    fn write_setter(&self, out: &mut GeneratedSource, ctx: &FieldContext<'_>) -> Result<(), FieldError> {
        let (name, typing, index) = self.resolve(ctx)?;
        let cast = if typing.cast {
            format!(" ({})", ctx.modifier.output_type)
        } else {
            String::new()
        };

        writeln!(out, "/**")?;
        writeln!(out, " * Set {}.", comment_text(ctx.display_name))?;
        writeln!(out, " * @param value - new value.")?;
        writeln!(out, " */")?;

        writeln!(out, "public void set{name}({} value) {{", typing.declared)?;
        out.indent();
        writeln!(out, "handle.{}.write({index},{cast} value);", ctx.modifier.accessor)?;
        out.dedent();
        writeln!(out, "}}")?;
        out.newline();

        Ok(())
    }
}

/// Entity lookups for a field holding an entity id
fn write_entity_accessors(out: &mut GeneratedSource, index: usize) -> Result<(), FieldError> {
    writeln!(out, "/**")?;
    writeln!(out, " * Retrieve the entity involved in this event.")?;
    writeln!(out, " * @param world - the current world of the entity.")?;
    writeln!(out, " * @return The involved entity.")?;
    writeln!(out, " */")?;
    writeln!(out, "public Entity getEntity(World world) {{")?;
    out.indent();
    writeln!(out, "return handle.getEntityModifier(world).read({index});")?;
    out.dedent();
    writeln!(out, "}}")?;
    out.newline();

    writeln!(out, "/**")?;
    writeln!(out, " * Retrieve the entity involved in this event.")?;
    writeln!(out, " * @param event - the packet event.")?;
    writeln!(out, " * @return The involved entity.")?;
    writeln!(out, " */")?;
    writeln!(out, "public Entity getEntity(PacketEvent event) {{")?;
    out.indent();
    writeln!(out, "return getEntity(event.getPlayer().getWorld());")?;
    out.dedent();
    writeln!(out, "}}")?;
    out.newline();

    Ok(())
}
