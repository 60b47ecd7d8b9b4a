/// Core domain types for metadata symbols and type references.
use serde::{Deserialize, Serialize};

/// A parameter of a method, constructor, or operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// How the argument is passed. Defaults to by-value.
    #[serde(default)]
    pub passing: Passing,
    /// The parameter's type.
    pub type_reference: TypeReference,
}

/// Parameter passing mode. `ByRef` and `Out` share the same encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Passing {
    /// Passed by reference.
    ByRef,
    /// Passed by value.
    #[default]
    ByValue,
    /// Output parameter.
    Out,
}

impl Passing {
    /// Whether the parameter encoding takes the by-reference suffix.
    pub fn is_by_reference(self) -> bool {
        return matches!(self, Passing::ByRef | Passing::Out);
    }
}

/// A type or member as described by the module's compiled metadata.
/// Immutable once constructed; the engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Index of the declaring type in the graph's flat table.
    /// `None` for root symbols.
    #[serde(default)]
    pub declaring_type: Option<SymbolId>,
    /// Names of generic parameters introduced directly by this symbol,
    /// in declaration order. Arity is the length of this list.
    #[serde(default)]
    pub generic_parameters: Vec<String>,
    /// What sort of symbol this is.
    pub kind: SymbolKind,
    /// Raw identifier text, without any arity suffix. May contain non-ASCII,
    /// or be a synthesized form such as `op_Implicit`, `Finalize`, or an
    /// explicit interface name like `IGeneric<T>.SampleMethod`.
    pub name: String,
    /// Root namespace. Meaningful only on symbols with no declaring type.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Ordered parameter list. Methods, constructors, and operators only.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type. Required for conversion operators, absent otherwise.
    #[serde(default)]
    pub return_type: Option<TypeReference>,
}

impl Symbol {
    /// Whether this symbol is an implicit or explicit conversion operator.
    pub fn is_conversion_operator(&self) -> bool {
        self.kind == SymbolKind::Operator
            && (self.name == "op_Implicit" || self.name == "op_Explicit")
    }
}

/// The complete symbol table for one module, as produced by the external
/// metadata reader. Declaring-type links are indices into `symbols`, so
/// chain walks are O(depth) with no cyclic ownership.
#[derive(Debug, Serialize, Deserialize)]
pub struct SymbolGraph {
    /// The flat symbol table.
    pub symbols: Vec<Symbol>,
}

impl SymbolGraph {
    /// Look up a symbol by index. `None` if the index is out of bounds.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0)
    }
}

/// Index of a symbol in its graph's flat table.
/// Newtype prevents mixing with arbitrary integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(
    /// Position in `SymbolGraph::symbols`.
    pub usize,
);

/// The kind of a symbol. Drives the kind prefix, member-name rendering,
/// and whether a parameter list is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SymbolKind {
    /// An instance constructor, rendered as `.ctor`.
    Constructor,
    /// An event.
    Event,
    /// A method implementing an interface member explicitly; its name
    /// carries the interface portion, e.g. `System.IDisposable.Dispose`.
    ExplicitInterfaceMethod,
    /// A field.
    Field,
    /// A finalizer, named `Finalize` in metadata.
    Finalizer,
    /// An ordinary method.
    Method,
    /// An operator method such as `op_Addition` or `op_Implicit`.
    Operator,
    /// A property.
    Property,
    /// A type constructor, rendered as `.cctor`.
    StaticConstructor,
    /// A type: class, struct, interface, enum, or delegate.
    Type,
}

impl SymbolKind {
    /// Whether symbols of this kind carry a parameter list.
    pub fn has_parameter_list(self) -> bool {
        return matches!(
            self,
            SymbolKind::Constructor
                | SymbolKind::ExplicitInterfaceMethod
                | SymbolKind::Finalizer
                | SymbolKind::Method
                | SymbolKind::Operator
                | SymbolKind::StaticConstructor
        );
    }

    /// Whether this kind is a member (anything but a type).
    pub fn is_member(self) -> bool {
        return self != SymbolKind::Type;
    }
}

/// A reference to a type as it appears in a signature. A closed variant:
/// the metadata reader produces nothing outside these cases.
///
/// By-ref-ness is a `Parameter` attribute, never a type reference case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeReference {
    /// An array over an element type. `rank` ≥ 1; a rank-1 array with
    /// default bounds is the common case.
    Array {
        /// The element type.
        element: Box<TypeReference>,
        /// Whether the metadata declared explicit lower bounds.
        #[serde(default)]
        explicit_lower_bounds: bool,
        /// Number of dimensions.
        #[serde(default = "default_array_rank")]
        rank: u32,
    },
    /// A generic parameter introduced by an enclosing generic type,
    /// indexed across the concatenated enclosing chain, outermost first.
    DeclaringTypeGenericParameter {
        /// Zero-based position in the concatenated enclosing scopes.
        index: usize,
    },
    /// A generic type applied to type arguments, e.g. `List<int>`.
    /// The definition is rendered without an arity suffix.
    GenericInstantiation {
        /// The type arguments, in order.
        arguments: Vec<TypeReference>,
        /// The generic type being instantiated.
        definition: Box<TypeReference>,
    },
    /// A generic parameter introduced by the member itself.
    OwnGenericParameter {
        /// Zero-based position in the member's own parameter list.
        index: usize,
    },
    /// A pointer to another type. Arbitrarily nestable.
    Pointer {
        /// The pointed-to type.
        pointee: Box<TypeReference>,
    },
    /// A named type, carried as its fully qualified dotted name.
    Primitive {
        /// Fully qualified dotted name, e.g. `System.Int32`.
        name: String,
    },
}

/// Serde default: arrays are rank 1 unless the graph says otherwise.
fn default_array_rank() -> u32 {
    1
}
