//! Field order recovery from a compiled serialization routine
//!
//! The scanner walks a method's instruction stream and reports the instance
//! fields it reads, in execution order. Which reads count is decided by a
//! [`FieldOrderStrategy`]; the default, [`FirstReadPerLine`], relies on the
//! generated serialization body touching exactly one wire field per source
//! line, so the first `getfield` after each line marker is the field being
//! written.

use serde::{Deserialize, Serialize};
use wrapgen_core::{FieldDescriptor, ScanError, TypeHierarchy};

/// Field access opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOpcode {
    GetStatic,
    PutStatic,
    GetField,
    PutField,
}

impl FieldOpcode {
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            0xb2 => Some(FieldOpcode::GetStatic),
            0xb3 => Some(FieldOpcode::PutStatic),
            0xb4 => Some(FieldOpcode::GetField),
            0xb5 => Some(FieldOpcode::PutField),
            _ => None,
        }
    }

    pub fn opcode(&self) -> u8 {
        match self {
            FieldOpcode::GetStatic => 0xb2,
            FieldOpcode::PutStatic => 0xb3,
            FieldOpcode::GetField => 0xb4,
            FieldOpcode::PutField => 0xb5,
        }
    }
}

/// One event in a method's instruction stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Instruction {
    /// Start of a new source line
    LineNumber { line: u32 },
    /// Field access with its symbolic owner and name
    Field {
        opcode: FieldOpcode,
        owner: String,
        name: String,
    },
    /// Any other opcode; carries no field information
    Other { opcode: u8 },
}

impl Instruction {
    pub fn line(line: u32) -> Self {
        Instruction::LineNumber { line }
    }

    pub fn get_field(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Instruction::Field {
            opcode: FieldOpcode::GetField,
            owner: owner.into(),
            name: name.into(),
        }
    }
}

/// A compiled method, addressed by the type that declares it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodBody {
    pub declaring_type: String,
    #[serde(default)]
    pub name: String,
    pub instructions: Vec<Instruction>,
}

impl MethodBody {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Decides which field reads in an instruction stream are wire fields
pub trait FieldOrderStrategy {
    /// Called before each method is scanned
    fn reset(&mut self) {}

    /// Name of the field to record for this instruction, if any.
    ///
    /// `declaring_type` is the type whose method is being scanned.
    fn select<'i>(&mut self, instruction: &'i Instruction, declaring_type: &str) -> Option<&'i str>;
}

/// Records the first instance-field read after each line marker.
///
/// Later reads on the same line (compound expressions, nested accessors)
/// are ignored. A first read whose owner is another type still consumes
/// the line but is not recorded.
#[derive(Debug, Clone, Default)]
pub struct FirstReadPerLine {
    new_line: bool,
}

impl FieldOrderStrategy for FirstReadPerLine {
    fn reset(&mut self) {
        self.new_line = false;
    }

    fn select<'i>(&mut self, instruction: &'i Instruction, declaring_type: &str) -> Option<&'i str> {
        match instruction {
            Instruction::LineNumber { .. } => {
                self.new_line = true;
                None
            }
            Instruction::Field {
                opcode: FieldOpcode::GetField,
                owner,
                name,
            } => {
                if !self.new_line {
                    return None;
                }
                self.new_line = false;

                (owner == declaring_type).then_some(name.as_str())
            }
            _ => None,
        }
    }
}

type FieldFilter = Box<dyn Fn(&FieldDescriptor) -> bool + Send + Sync>;

/// Wire order together with the declaring type's memory order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub network_order: Vec<FieldDescriptor>,
    pub memory_order: Vec<FieldDescriptor>,
}

impl ScanResult {
    pub fn new(network_order: Vec<FieldDescriptor>, memory_order: Vec<FieldDescriptor>) -> Self {
        Self {
            network_order,
            memory_order,
        }
    }

    pub fn len(&self) -> usize {
        self.network_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.network_order.is_empty()
    }
}

/// Recovers wire field order from instruction streams
pub struct FieldScanner<'h, S = FirstReadPerLine> {
    hierarchy: &'h TypeHierarchy,
    strategy: S,
    filter: FieldFilter,
}

impl<'h> FieldScanner<'h, FirstReadPerLine> {
    pub fn new(hierarchy: &'h TypeHierarchy) -> Self {
        Self::with_strategy(hierarchy, FirstReadPerLine::default())
    }
}

impl<'h, S: FieldOrderStrategy> FieldScanner<'h, S> {
    pub fn with_strategy(hierarchy: &'h TypeHierarchy, strategy: S) -> Self {
        Self {
            hierarchy,
            strategy,
            filter: Box::new(|_| true),
        }
    }

    /// Only record fields accepted by `filter`
    pub fn with_filter(
        mut self,
        filter: impl Fn(&FieldDescriptor) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Fields read by `instructions`, in wire order.
    ///
    /// A selected name that no type in the hierarchy declares means the
    /// instruction stream and the hierarchy disagree, which is fatal.
    pub fn scan(
        &mut self,
        instructions: &[Instruction],
        declaring_type: &str,
    ) -> Result<Vec<FieldDescriptor>, ScanError> {
        if !self.hierarchy.contains(declaring_type) {
            return Err(ScanError::UnknownType(declaring_type.to_string()));
        }

        let memory_order = self.hierarchy.memory_order(declaring_type);
        let mut fields = Vec::new();

        self.strategy.reset();
        for instruction in instructions {
            let Some(name) = self.strategy.select(instruction, declaring_type) else {
                continue;
            };

            let (owner, decl) = self
                .hierarchy
                .find_field(declaring_type, name)
                .ok_or_else(|| ScanError::UnresolvedFieldName {
                    type_name: declaring_type.to_string(),
                    field: name.to_string(),
                })?;

            let Some(descriptor) = memory_order
                .iter()
                .find(|f| f.declaring_type == owner && f.name == decl.name)
            else {
                tracing::debug!(field = name, "skipping static field read");
                continue;
            };

            if (self.filter)(descriptor) {
                fields.push(descriptor.clone());
            }
        }

        tracing::debug!(
            declaring_type,
            fields = fields.len(),
            "recovered wire order"
        );
        Ok(fields)
    }

    /// Scan a method and pair its wire order with the memory order
    pub fn scan_method(&mut self, method: &MethodBody) -> Result<ScanResult, ScanError> {
        let network_order = self.scan(&method.instructions, &method.declaring_type)?;
        let memory_order = self.hierarchy.memory_order(&method.declaring_type);

        Ok(ScanResult::new(network_order, memory_order))
    }
}
