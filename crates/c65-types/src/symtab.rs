//! Symbol table boundary.
//!
//! Type strings never embed struct layouts or parameter lists. They embed a
//! `SymId` or `FuncId`, and anything that needs the record asks a
//! `SymbolTable` for it. `SymTab` is the in-memory arena the compiler uses.

use bitflags::bitflags;

use crate::codec::PAYLOAD_MAX;
use crate::invariants;
use crate::type_str::TypeString;

/// Reference to a struct/union entry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SymId(u32);

/// Reference to a function descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FuncId(u32);

macro_rules! raw_id {
    ($id:ident) => {
        impl $id {
            /// Raw index for encoding/debugging.
            #[inline]
            pub fn as_u32(self) -> u32 {
                self.0
            }

            /// Create from a raw index. Use only when decoding a type string.
            #[inline]
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }
        }
    };
}

raw_id!(SymId);
raw_id!(FuncId);

bitflags! {
    /// Calling convention and declaration flags of a function.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FuncFlags: u16 {
        const NEAR = 0x0001;
        const FAR = 0x0002;
        const FASTCALL = 0x0004;
        /// Takes `...`, or was declared without a prototype.
        const VARIADIC = 0x0008;
        /// Called before any declaration was seen.
        const IMPLICIT = 0x0010;
        /// Declared with an empty parameter list: `f()`.
        const EMPTY = 0x0020;
        /// Declared with an explicit `(void)` parameter list.
        const VOID_PARAM = 0x0040;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamDesc {
    pub name: String,
    pub ty: TypeString,
    /// Parameter lives in a register variable.
    pub register: bool,
}

impl ParamDesc {
    pub fn new(name: impl Into<String>, ty: TypeString) -> Self {
        Self {
            name: name.into(),
            ty,
            register: false,
        }
    }

    pub fn in_register(mut self) -> Self {
        self.register = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncDesc {
    pub flags: FuncFlags,
    pub params: Vec<ParamDesc>,
}

impl FuncDesc {
    pub fn new(flags: FuncFlags) -> Self {
        Self {
            flags,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: ParamDesc) -> Self {
        self.params.push(param);
        self
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn is_variadic(&self) -> bool {
        self.flags.contains(FuncFlags::VARIADIC)
    }

    pub fn is_fastcall(&self) -> bool {
        self.flags.contains(FuncFlags::FASTCALL)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberDesc {
    pub name: String,
    pub ty: TypeString,
    pub offset: u32,
}

/// Layout of a struct or union.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateDesc {
    pub name: String,
    /// Total size in bytes. Zero while the aggregate is incomplete.
    pub size: u32,
    pub members: Vec<MemberDesc>,
}

impl AggregateDesc {
    /// An incomplete aggregate: declared, not yet defined.
    pub fn incomplete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            members: Vec::new(),
        }
    }

    pub fn member(&self, name: &str) -> Option<&MemberDesc> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Lookups the type core needs from the symbol table.
pub trait SymbolTable {
    fn aggregate(&self, id: SymId) -> &AggregateDesc;
    fn function(&self, id: FuncId) -> &FuncDesc;
    fn add_function(&mut self, desc: FuncDesc) -> FuncId;
}

/// Arena of aggregate and function descriptors.
#[derive(Debug, Default)]
pub struct SymTab {
    aggregates: Vec<AggregateDesc>,
    functions: Vec<FuncDesc>,
}

impl SymTab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_aggregate(&mut self, desc: AggregateDesc) -> SymId {
        let id = SymId(next_index(self.aggregates.len(), "aggregate"));
        self.aggregates.push(desc);
        id
    }

    /// Complete a previously incomplete aggregate.
    pub fn aggregate_mut(&mut self, id: SymId) -> &mut AggregateDesc {
        match self.aggregates.get_mut(id.0 as usize) {
            Some(desc) => desc,
            None => invariants::dangling("aggregate", id.0),
        }
    }
}

impl SymbolTable for SymTab {
    fn aggregate(&self, id: SymId) -> &AggregateDesc {
        self.aggregates
            .get(id.0 as usize)
            .unwrap_or_else(|| invariants::dangling("aggregate", id.0))
    }

    fn function(&self, id: FuncId) -> &FuncDesc {
        self.functions
            .get(id.0 as usize)
            .unwrap_or_else(|| invariants::dangling("function", id.0))
    }

    fn add_function(&mut self, desc: FuncDesc) -> FuncId {
        let id = FuncId(next_index(self.functions.len(), "function"));
        self.functions.push(desc);
        id
    }
}

/// Index for the next entry. It must fit an embedded payload.
fn next_index(len: usize, what: &str) -> u32 {
    match u32::try_from(len) {
        Ok(index) if index <= PAYLOAD_MAX => index,
        _ => panic!("internal error: too many {what} descriptors"),
    }
}
