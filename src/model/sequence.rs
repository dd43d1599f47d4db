//! Dance sequences and their positional constraints.

use std::fmt;

use super::dance::Dance;
use crate::error::{ShapeError, ValidationKind};

/// An ordered block of dances performed without rest, plus optional
/// positional constraints on where the block may appear in a program.
///
/// Positions are 1-based. `order` pins the sequence to an exact position,
/// `before` requires a position strictly lower, `after` a position strictly
/// higher. `order` is exclusive with the other two; see [`Sequence::validate`].
///
/// # Examples
///
/// ```
/// use u_recital::model::{Dance, Sequence};
///
/// let opener = Sequence::new(vec![Dance::new(["a", "b"])]).unwrap().with_order(1);
/// let closer = Sequence::new(vec![Dance::new(["b", "c"])]).unwrap();
/// assert_eq!(opener.isect_ct(&closer), 1);
/// assert_eq!(opener.order(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SequenceFields"))]
pub struct Sequence {
    dances: Vec<Dance>,
    order: Option<usize>,
    before: Option<usize>,
    after: Option<usize>,
}

impl Sequence {
    /// Creates an unconstrained sequence.
    ///
    /// Fails with [`ShapeError`] when `dances` is empty.
    pub fn new(dances: Vec<Dance>) -> Result<Self, ShapeError> {
        if dances.is_empty() {
            return Err(ShapeError);
        }
        Ok(Self {
            dances,
            order: None,
            before: None,
            after: None,
        })
    }

    /// A single dance with nobody on stage.
    pub fn intermission() -> Self {
        Self {
            dances: vec![Dance::empty().with_title("Intermission")],
            order: None,
            before: None,
            after: None,
        }
    }

    /// Pins the sequence to an exact 1-based position.
    pub fn with_order(mut self, position: usize) -> Self {
        self.order = Some(position);
        self
    }

    /// Requires the sequence to appear strictly before `position`.
    pub fn with_before(mut self, position: usize) -> Self {
        self.before = Some(position);
        self
    }

    /// Requires the sequence to appear strictly after `position`.
    pub fn with_after(mut self, position: usize) -> Self {
        self.after = Some(position);
        self
    }

    pub fn dances(&self) -> &[Dance] {
        &self.dances
    }

    pub fn order(&self) -> Option<usize> {
        self.order
    }

    pub fn before(&self) -> Option<usize> {
        self.before
    }

    pub fn after(&self) -> Option<usize> {
        self.after
    }

    pub fn first_dance(&self) -> Option<&Dance> {
        self.dances.first()
    }

    pub fn last_dance(&self) -> Option<&Dance> {
        self.dances.last()
    }

    /// Overlap cost of performing `next` immediately after `self`: the number
    /// of dancers in this sequence's last dance who also open `next`.
    pub fn isect_ct(&self, next: &Sequence) -> usize {
        match (self.last_dance(), next.first_dance()) {
            (Some(last), Some(first)) => last.shared_with(first),
            _ => 0,
        }
    }

    /// Whether `position` lies inside the before/after window.
    ///
    /// `order` is not considered here.
    pub fn window_admits(&self, position: usize) -> bool {
        self.before.map_or(true, |b| b > position) && self.after.map_or(true, |a| a < position)
    }

    /// Checks the positional constraints against a program of `count`
    /// sequences.
    pub fn validate(&self, count: usize) -> Result<(), ValidationKind> {
        if let Some(order) = self.order {
            if self.before.is_some() || self.after.is_some() {
                return Err(ValidationKind::OrderWithWindow);
            }
            if order == 0 || order > count {
                return Err(ValidationKind::OrderOutOfRange { order, count });
            }
        }
        if let Some(before) = self.before {
            if before < 2 {
                return Err(ValidationKind::BeforeTooSmall { before });
            }
        }
        if let Some(after) = self.after {
            let max = count.saturating_sub(1);
            if after == 0 || after > max {
                return Err(ValidationKind::AfterOutOfRange { after, max });
            }
        }
        if let (Some(after), Some(before)) = (self.after, self.before) {
            if after + 1 >= before {
                return Err(ValidationKind::EmptyWindow { after, before });
            }
        }
        Ok(())
    }
}

/// Wire form of [`Sequence`]; deserialization goes through
/// [`Sequence::new`] so the non-empty rule holds.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SequenceFields {
    dances: Vec<Dance>,
    #[serde(default)]
    order: Option<usize>,
    #[serde(default)]
    before: Option<usize>,
    #[serde(default)]
    after: Option<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<SequenceFields> for Sequence {
    type Error = ShapeError;

    fn try_from(fields: SequenceFields) -> Result<Self, Self::Error> {
        let mut sequence = Sequence::new(fields.dances)?;
        sequence.order = fields.order;
        sequence.before = fields.before;
        sequence.after = fields.after;
        Ok(sequence)
    }
}

impl AsRef<Sequence> for Sequence {
    fn as_ref(&self) -> &Sequence {
        self
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dance) in self.dances.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{dance}")?;
        }
        Ok(())
    }
}
