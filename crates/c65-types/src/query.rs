//! Predicates and accessors.
//!
//! Everything here reads the leading token(s) of a type string. Sub-types
//! come back as views into the same buffer; only `array_to_pointer`
//! allocates.

use crate::codec::{self, PAYLOAD_LEN};
use crate::construct::{UNSPECIFIED_COUNT, pointer_to};
use crate::invariants;
use crate::symtab::{FuncDesc, FuncId, SymId, SymbolTable};
use crate::token::{BaseKind, Qualifiers, Token, TypeClass};
use crate::type_str::{TypeStr, TypeString};

/// One level of a type string, decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeData<'a> {
    /// Integer, floating, enum or void type.
    Scalar(BaseKind),
    Pointer {
        pointee: TypeStr<'a>,
    },
    Array {
        /// `None` for an array of unspecified size.
        count: Option<u32>,
        element: TypeStr<'a>,
    },
    Function {
        desc: FuncId,
        returns: TypeStr<'a>,
    },
    Struct(SymId),
    Union(SymId),
    /// A tag with no assigned base kind.
    Unknown(Token),
}

impl<'a> TypeStr<'a> {
    pub fn base_kind(self) -> Option<BaseKind> {
        self.head().kind()
    }

    pub fn class(self) -> Option<TypeClass> {
        self.head().class()
    }

    /// Whether the leading tag is followed by an embedded payload.
    pub fn has_payload(self) -> bool {
        self.base_kind().is_some_and(BaseKind::has_payload)
    }

    pub fn is_class_int(self) -> bool {
        self.class() == Some(TypeClass::Int)
    }

    pub fn is_class_float(self) -> bool {
        self.class() == Some(TypeClass::Float)
    }

    /// Pointers and arrays.
    pub fn is_class_ptr(self) -> bool {
        self.class() == Some(TypeClass::Ptr)
    }

    /// Structs and unions.
    pub fn is_class_struct(self) -> bool {
        self.class() == Some(TypeClass::Struct)
    }

    pub fn is_unsigned(self) -> bool {
        self.head().is_unsigned()
    }

    pub fn is_array(self) -> bool {
        self.base_kind() == Some(BaseKind::Array)
    }

    pub fn is_pointer(self) -> bool {
        self.base_kind() == Some(BaseKind::Ptr)
    }

    pub fn is_function(self) -> bool {
        self.base_kind() == Some(BaseKind::Func)
    }

    /// Qualifiers of the object type. For arrays, those of the element type.
    pub fn qualifiers(self) -> Qualifiers {
        let mut ty = self;
        while ty.is_array() {
            ty = ty.skip(1 + PAYLOAD_LEN);
        }
        ty.head().qualifiers()
    }

    pub fn is_const(self) -> bool {
        self.qualifiers().contains(Qualifiers::CONST)
    }

    pub fn is_volatile(self) -> bool {
        self.qualifiers().contains(Qualifiers::VOLATILE)
    }

    /// The type a pointer points to, or an array's element type.
    #[track_caller]
    pub fn indirect(self) -> TypeStr<'a> {
        match self.base_kind() {
            Some(BaseKind::Array) => self.skip(1 + PAYLOAD_LEN),
            Some(BaseKind::Ptr) => self.skip(1),
            _ => invariants::unexpected_type("indirect", "pointer or array", self.head()),
        }
    }

    /// Pointer to the element type: the decayed form of an array.
    #[track_caller]
    pub fn array_to_pointer(self) -> TypeString {
        pointer_to(self.element_type())
    }

    /// Descriptor of a function or pointer-to-function type.
    #[track_caller]
    pub fn function_descriptor(self) -> FuncId {
        FuncId::from_raw(codec::decode(self.through_pointer("function_descriptor").payload()))
    }

    /// Return type of a function or pointer-to-function type.
    #[track_caller]
    pub fn function_return_type(self) -> TypeStr<'a> {
        self.through_pointer("function_return_type").skip(1 + PAYLOAD_LEN)
    }

    /// The function type itself, looking through one pointer.
    #[track_caller]
    fn through_pointer(self, op: &str) -> TypeStr<'a> {
        let ty = if self.head().unqualified() == Token::PTR {
            self.skip(1)
        } else {
            self
        };
        if ty.head() != Token::FUNC {
            invariants::unexpected_type(op, "function", ty.head());
        }
        ty
    }

    #[track_caller]
    pub fn func_desc<'s>(self, symbols: &'s dyn SymbolTable) -> &'s FuncDesc {
        symbols.function(self.function_descriptor())
    }

    #[track_caller]
    pub fn is_fastcall(self, symbols: &dyn SymbolTable) -> bool {
        self.func_desc(symbols).is_fastcall()
    }

    #[track_caller]
    pub fn is_variadic(self, symbols: &dyn SymbolTable) -> bool {
        self.func_desc(symbols).is_variadic()
    }

    /// Declared element count, `-1` when unspecified.
    #[track_caller]
    pub fn element_count(self) -> i64 {
        self.require_array("element_count");
        match codec::decode(self.payload()) {
            UNSPECIFIED_COUNT => -1,
            count => i64::from(count),
        }
    }

    #[track_caller]
    pub fn element_type(self) -> TypeStr<'a> {
        self.require_array("element_type");
        self.skip(1 + PAYLOAD_LEN)
    }

    /// Symbol table entry of a struct or union type.
    #[track_caller]
    pub fn aggregate_ref(self) -> SymId {
        match self.base_kind() {
            Some(BaseKind::Struct | BaseKind::Union) => {
                SymId::from_raw(codec::decode(self.payload()))
            }
            _ => invariants::unexpected_type("aggregate_ref", "struct or union", self.head()),
        }
    }

    #[track_caller]
    fn require_array(self, op: &str) {
        if !self.is_array() {
            invariants::unexpected_type(op, "array", self.head());
        }
    }

    /// Decode the leading level of the type.
    pub fn classify(self) -> TypeData<'a> {
        let Some(kind) = self.base_kind() else {
            return TypeData::Unknown(self.head());
        };
        match kind {
            BaseKind::Ptr => TypeData::Pointer {
                pointee: self.skip(1),
            },
            BaseKind::Array => TypeData::Array {
                count: u32::try_from(self.element_count()).ok(),
                element: self.skip(1 + PAYLOAD_LEN),
            },
            BaseKind::Func => TypeData::Function {
                desc: FuncId::from_raw(codec::decode(self.payload())),
                returns: self.skip(1 + PAYLOAD_LEN),
            },
            BaseKind::Struct => TypeData::Struct(self.aggregate_ref()),
            BaseKind::Union => TypeData::Union(self.aggregate_ref()),
            scalar => TypeData::Scalar(scalar),
        }
    }
}
