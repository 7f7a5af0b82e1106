//! Value types shared by every optimization strategy: the demand/catalog
//! inputs, the cutting plan produced for a single stock instance, and the
//! aggregate result handed back to the caller.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A single demanded piece that needs to be cut from stock.
///
/// Before optimization, `quantity` may be greater than one; the demand
/// expander (see [`crate::expand`]) explodes such a `Part` into `quantity`
/// singletons, each carrying `quantity == 1`.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    /// Identifier unique among the parts passed to [`crate::optimize`]. After
    /// expansion and splitting this is also unique among all placed and
    /// unplaced output parts.
    pub id: String,

    /// Length of this piece in millimetres. Must be positive.
    pub length: f64,

    /// Quantity of this piece requested. Before being handed to the engine
    /// this may be any positive integer; the engine itself only ever works
    /// with expanded parts where this is always `1`.
    pub quantity: u32,

    /// Display label for this piece. Defaults to `id` if not set explicitly.
    pub label: String,
}

impl Part {
    /// Creates a new part with `label` defaulted to `id`.
    pub fn new(id: impl Into<String>, length: f64, quantity: u32) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            length,
            quantity,
        }
    }

    /// Sets a display label distinct from `id`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// The available quantity of a [`Stock`] type.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockQuantity {
    /// No declared limit on how many instances of this stock type may be
    /// consumed.
    Unbounded,

    /// At most this many instances of this stock type may be consumed.
    Bounded(u32),
}

impl StockQuantity {
    /// A large, finite stand-in for `Unbounded` used internally by the
    /// inventory tracker so that both variants can be accounted for with a
    /// single counter. Semantically equivalent to unbounded within any
    /// realistic request.
    pub(crate) const UNBOUNDED_CAP: u32 = 999;

    pub(crate) fn cap(self) -> u32 {
        match self {
            StockQuantity::Unbounded => Self::UNBOUNDED_CAP,
            StockQuantity::Bounded(n) => n,
        }
    }
}

/// A type of raw stock (bar, rail, lath) that demanded parts can be cut from.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Stock {
    /// Stable key identifying this stock type. Multiple consumed instances of
    /// the same type share this id and are distinguished by
    /// [`CutPlan::stock_index`].
    pub id: String,

    /// Length of one instance of this stock type, in millimetres. Must be
    /// positive.
    pub length: f64,

    /// How many instances of this stock type are available.
    pub quantity: StockQuantity,

    /// Informational price per instance. Carried through to the caller but
    /// not currently used as an optimization objective term.
    pub cost: f64,

    /// Display label for this stock type. Defaults to `"<length>mm"`.
    pub label: String,
}

impl Stock {
    /// Creates a new stock type with `cost` zero and `label` defaulted to
    /// `"<length>mm"`.
    pub fn new(id: impl Into<String>, length: f64, quantity: StockQuantity) -> Self {
        Self {
            id: id.into(),
            length,
            quantity,
            cost: 0.0,
            label: format!("{length}mm"),
        }
    }

    /// Sets an informational cost per instance.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Sets a display label distinct from the default `"<length>mm"`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// One piece cut from a consumed stock instance.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Cut {
    /// Id of the (expanded, possibly split) part this cut realizes.
    pub id: String,

    /// Length of this cut, in millimetres.
    pub length: f64,
}

/// A single consumed stock instance and the parts cut from it.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CutPlan {
    /// Id of the stock type this instance was cut from.
    pub stock_id: String,

    /// Length of the stock instance, in millimetres.
    pub stock_length: f64,

    /// Ordered sequence of cuts made on this instance.
    pub cuts: Vec<Cut>,

    /// Unused length remaining on this instance after all cuts and internal
    /// kerf losses, in millimetres.
    pub waste: f64,

    /// 0-based ordinal of this instance among all consumed instances sharing
    /// `stock_id`.
    pub stock_index: u32,
}

/// The optimization strategy used to produce an [`OptimizationResult`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exact column-generation / pattern-based integer program (see
    /// [`crate::exact`]). Falls back to [`Algorithm::Hybrid`] when the
    /// solver backend is unavailable or returns a non-optimal status.
    OrtoolsOptimal,

    /// Documented alias for [`Algorithm::Ffd`]; kept as a distinct tag
    /// because the name is part of the external contract.
    OrtoolsFast,

    /// First-Fit-Decreasing greedy packer (see [`crate::ffd`]).
    Ffd,

    /// Two-phase large-then-small best-fit packer (see [`crate::hybrid`]).
    Hybrid,

    /// Split-aware packer that parks remainders to fill gaps (see
    /// [`crate::smart_split`]).
    SmartSplit,
}

/// Parameters controlling a single [`crate::optimize`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptimizeParams {
    /// Strategy to use.
    pub algorithm: Algorithm,

    /// Width of material removed by each cut, in millimetres. Must be
    /// non-negative.
    pub kerf: f64,

    /// Maximum number of segments an overlength part may be divided into by
    /// the splitter. Must be at least 1.
    pub max_split_parts: u32,

    /// Extra length added to the mating end of a split segment to cover a
    /// physical joint, in millimetres. Must be non-negative.
    pub joint_allowance: f64,

    /// Hard cap on the number of patterns the pattern enumerator will
    /// produce per distinct stock length, used only by
    /// [`Algorithm::OrtoolsOptimal`].
    pub pattern_cap: usize,
}

impl Default for OptimizeParams {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Ffd,
            kerf: 3.0,
            max_split_parts: 2,
            joint_allowance: 0.0,
            pattern_cap: 1000,
        }
    }
}

/// The result of a single [`crate::optimize`] call.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationResult {
    /// Strategy that actually produced this result. May differ from the
    /// requested algorithm when the exact solver silently falls back to
    /// [`Algorithm::Hybrid`].
    pub algorithm: Algorithm,

    /// Consumed stock instances, each with the parts cut from it.
    pub plans: Vec<CutPlan>,

    /// Number of stock instances consumed; equal to `plans.len()`.
    pub total_stocks_used: usize,

    /// Total unused length across all plans, in millimetres, rounded to 0.1.
    pub total_waste: f64,

    /// `total_waste` as a percentage of total stock length consumed,
    /// rounded to 0.01. Zero when no stock was consumed.
    pub waste_percentage: f64,

    /// Parts that could neither fit on any available stock nor be split to
    /// fit. Non-fatal; the rest of the result is still usable.
    pub parts_not_placed: Vec<Part>,

    /// Wall-clock time spent inside [`crate::optimize`], in milliseconds,
    /// rounded to 0.01.
    pub computation_time_ms: f64,
}

/// An open (in-progress) consumption of one stock instance, shared by the
/// FFD, Hybrid, and Smart-Split packers.
#[derive(Clone, Debug)]
pub(crate) struct OpenStock {
    pub(crate) stock_id: String,
    pub(crate) stock_length: f64,
    pub(crate) remaining: f64,
    pub(crate) cuts: Vec<Cut>,
}

impl OpenStock {
    pub(crate) fn new(stock: &Stock) -> Self {
        Self {
            stock_id: stock.id.clone(),
            stock_length: stock.length,
            remaining: stock.length,
            cuts: Vec::new(),
        }
    }

    /// Whether a part of `length` fits in the remaining space, accounting
    /// for the kerf incurred by an additional cut once this stock already
    /// holds at least one piece.
    pub(crate) fn fits(&self, length: f64, kerf: f64) -> bool {
        let needed = if self.cuts.is_empty() {
            length
        } else {
            length + kerf
        };
        self.remaining + EPS >= needed
    }

    pub(crate) fn place(&mut self, part: &Part, kerf: f64) {
        let needed = if self.cuts.is_empty() {
            part.length
        } else {
            part.length + kerf
        };
        self.remaining -= needed;
        self.cuts.push(Cut {
            id: part.id.clone(),
            length: part.length,
        });
    }
}

/// Floating point tolerance used throughout the engine for length
/// comparisons. Lengths are conventionally integer millimetres but are
/// carried as `f64`, so comparisons must tolerate accumulated rounding.
pub(crate) const EPS: f64 = 1e-6;
