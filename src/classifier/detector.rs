use super::analysis::FiveCardAnalysis;
use crate::hand::Shape;

/// Strategy pattern: each five-card shape knows how to recognize itself.
pub trait ShapeDetector {
    fn shape(&self) -> Shape;
    fn detect(&self, analysis: &FiveCardAnalysis) -> bool;
}

/// Five consecutive ranks, all same suit.
pub struct StraightFlushDetector;

impl ShapeDetector for StraightFlushDetector {
    fn shape(&self) -> Shape {
        Shape::StraightFlush
    }

    fn detect(&self, analysis: &FiveCardAnalysis) -> bool {
        analysis.is_flush && analysis.is_run
    }
}

/// Four cards of one rank plus one other card.
pub struct QuadDetector;

impl ShapeDetector for QuadDetector {
    fn shape(&self) -> Shape {
        Shape::Quad
    }

    fn detect(&self, analysis: &FiveCardAnalysis) -> bool {
        analysis.rank_groups.is_four_and_one()
    }
}

/// Three of a kind plus a pair.
pub struct FullHouseDetector;

impl ShapeDetector for FullHouseDetector {
    fn shape(&self) -> Shape {
        Shape::FullHouse
    }

    fn detect(&self, analysis: &FiveCardAnalysis) -> bool {
        analysis.rank_groups.is_three_and_two()
    }
}

pub struct FlushDetector;

impl ShapeDetector for FlushDetector {
    fn shape(&self) -> Shape {
        Shape::Flush
    }

    fn detect(&self, analysis: &FiveCardAnalysis) -> bool {
        analysis.is_flush
    }
}

pub struct StraightDetector;

impl ShapeDetector for StraightDetector {
    fn shape(&self) -> Shape {
        Shape::Straight
    }

    fn detect(&self, analysis: &FiveCardAnalysis) -> bool {
        analysis.is_run
    }
}

// Priority order: first match wins.
pub const DETECTORS: [&dyn ShapeDetector; 5] =
    [&StraightFlushDetector, &QuadDetector, &FullHouseDetector, &FlushDetector, &StraightDetector];

/// Shape of the first detector matching `analysis`.
pub fn detect_five(analysis: &FiveCardAnalysis) -> Option<Shape> {
    DETECTORS.iter().find(|d| d.detect(analysis)).map(|d| d.shape())
}
