use serde::{Deserialize, Serialize};

/// One population member's value for a statistic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSample {
    /// Player (or team, lineup) the value belongs to
    pub subject_id: String,

    /// Statistic value, expected to be finite
    pub value: f64,

    /// Optional weight such as total minutes played
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl StatSample {
    /// Create a new unweighted sample
    pub fn new(subject_id: impl Into<String>, value: f64) -> Self {
        Self { subject_id: subject_id.into(), value, weight: None }
    }

    /// Attach a weight to the sample
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Extract the raw values of a population
    pub fn values(samples: &[StatSample]) -> Vec<f64> {
        samples.iter().map(|s| s.value).collect()
    }
}

/// A point on an estimated density curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    pub x: f64,
    pub y: f64,
}

/// A density curve together with the bandwidth it was smoothed with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    /// Points in ascending `x` order
    pub points: Vec<DensityPoint>,

    /// Kernel bandwidth `h`
    pub bandwidth: f64,
}

impl DensityCurve {
    /// Curve for an empty population
    pub fn empty() -> Self {
        Self { points: Vec::new(), bandwidth: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points as `[x, y]` pairs, the shape chart series consume
    pub fn pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// An equal-width histogram bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    /// Inclusive lower bound
    pub range_start: f64,

    /// Exclusive upper bound, inclusive for the final bucket
    pub range_end: f64,

    /// Number of samples in the bucket
    pub count: usize,

    /// Samples assigned to the bucket, in input order
    pub members: Vec<StatSample>,
}

impl HistogramBucket {
    pub fn new(range_start: f64, range_end: f64) -> Self {
        Self { range_start, range_end, count: 0, members: Vec::new() }
    }

    pub(crate) fn push(&mut self, sample: StatSample) {
        self.count += 1;
        self.members.push(sample);
    }
}

/// One entry in a player's running total across games
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameLogPoint {
    /// 1-based game number; 0 is the season start
    pub game_index: u32,

    /// Running total after this game
    pub cumulative_value: f64,
}

impl GameLogPoint {
    pub fn new(game_index: u32, cumulative_value: f64) -> Self {
        Self { game_index, cumulative_value }
    }
}

/// Observed cumulative progress plus a linear projection to the season's end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Observed points, gap-filled up to the authoritative current game
    pub filled: Vec<GameLogPoint>,

    /// Projected total at the final game of the season
    pub projected_endpoint: GameLogPoint,
}

/// A point of a signed sequential signal, e.g. score differential per play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowPoint {
    /// Position in the original sequence; fractional for inserted crossings
    pub index: f64,

    pub value: f64,
}

impl FlowPoint {
    pub fn new(index: f64, value: f64) -> Self {
        Self { index, value }
    }

    /// Index of the original sample this point sits on or follows
    pub fn source_index(&self) -> usize {
        self.index.floor() as usize
    }
}

/// Positive and negative masks of a signed series, aligned point for point
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SignedSeries {
    /// Value where `>= 0`, otherwise `None`
    pub positive: Vec<Option<f64>>,

    /// Value where `<= 0`, otherwise `None`
    pub negative: Vec<Option<f64>>,
}
