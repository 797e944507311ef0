//! Vehicle routing test fixtures.
//!
//! Vehicles are anchors; visits are planning entities whose chained
//! `previous` variable points at a vehicle or at another visit. The solution
//! keeps the inverse relation (`next visit`) as a shadow index that the
//! setter maintains, so moves can use an O(1) inverse supply.
//!
//! # Example
//!
//! ```
//! use chainforge_test::route::RouteSolution;
//!
//! // Vehicle 0: 0 -> 1 -> 2 ; vehicle 1: 3
//! let solution = RouteSolution::from_chains(2, 4, &[&[0, 1, 2], &[3]]);
//! assert_eq!(solution.chains(), vec![vec![0, 1, 2], vec![3]]);
//! ```

use chainforge_core::domain::{
    chain_of, ChainedValue, ChainedVariableDescriptor, InverseSupply, PlanningSolution,
    SolutionInverseSupply,
};
use chainforge_core::SimpleScore;

/// A vehicle heading one chain.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id: usize,
    pub depot: i64,
}

/// A visit chained behind a vehicle or another visit.
#[derive(Clone, Debug, PartialEq)]
pub struct Visit {
    pub id: usize,
    pub location: i64,
    pub previous: Option<ChainedValue>,
}

/// Route solution with an in-solution inverse index.
#[derive(Clone, Debug)]
pub struct RouteSolution {
    pub vehicles: Vec<Vehicle>,
    pub visits: Vec<Visit>,
    pub next_visits: InverseSupply,
    pub score: Option<SimpleScore>,
}

impl PlanningSolution for RouteSolution {
    type Score = SimpleScore;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }
}

impl RouteSolution {
    /// Builds a solution from explicit chains, one slice of visit ids per vehicle.
    ///
    /// Visit `i` sits at location `10 * (i + 1)`; every depot is at 0.
    /// Visits that appear in no chain are unassigned.
    pub fn from_chains(vehicle_count: usize, visit_count: usize, chains: &[&[usize]]) -> Self {
        let vehicles = (0..vehicle_count)
            .map(|id| Vehicle { id, depot: 0 })
            .collect();
        let mut visits: Vec<Visit> = (0..visit_count)
            .map(|id| Visit {
                id,
                location: 10 * (id as i64 + 1),
                previous: None,
            })
            .collect();

        for (vehicle, chain) in chains.iter().enumerate() {
            let mut previous = ChainedValue::Anchor(vehicle);
            for &visit in chain.iter() {
                visits[visit].previous = Some(previous);
                previous = ChainedValue::Entity(visit);
            }
        }

        let mut solution = Self {
            vehicles,
            visits,
            next_visits: InverseSupply::new(),
            score: None,
        };
        solution.next_visits = InverseSupply::from_solution(&solution, &previous_variable());
        solution
    }

    /// Returns the visits of every vehicle, head first.
    pub fn chains(&self) -> Vec<Vec<usize>> {
        let variable = nullable_previous_variable();
        let inverse = next_visit_supply();
        (0..self.vehicles.len())
            .map(|vehicle| chain_of(self, &variable, &inverse, vehicle).unwrap_or_default())
            .collect()
    }

    /// Returns the `previous` value of every visit, in visit order.
    pub fn assignments(&self) -> Vec<Option<ChainedValue>> {
        self.visits.iter().map(|v| v.previous).collect()
    }

    fn location_of(&self, value: ChainedValue) -> i64 {
        match value {
            ChainedValue::Anchor(idx) => self.vehicles[idx].depot,
            ChainedValue::Entity(idx) => self.visits[idx].location,
        }
    }
}

/// Gets the `previous` value of the visit at index.
pub fn get_previous(s: &RouteSolution, idx: usize) -> Option<ChainedValue> {
    s.visits.get(idx).and_then(|v| v.previous)
}

/// Sets the `previous` value of the visit at index and updates the inverse index.
pub fn set_previous(s: &mut RouteSolution, idx: usize, value: Option<ChainedValue>) {
    if let Some(visit) = s.visits.get_mut(idx) {
        let old = visit.previous;
        visit.previous = value;
        s.next_visits.update(old, value, idx);
    }
}

/// Returns the visit currently trailing `value`.
pub fn next_visit(s: &RouteSolution, value: ChainedValue) -> Option<usize> {
    s.next_visits.get(&value)
}

pub fn visit_count(s: &RouteSolution) -> usize {
    s.visits.len()
}

pub fn vehicle_count(s: &RouteSolution) -> usize {
    s.vehicles.len()
}

/// Descriptor of the `previous` variable; every visit must be assigned.
pub fn previous_variable() -> ChainedVariableDescriptor<RouteSolution> {
    ChainedVariableDescriptor::new(
        "previous",
        0,
        get_previous,
        set_previous,
        visit_count,
        vehicle_count,
    )
}

/// Descriptor of the `previous` variable allowing unassigned visits.
pub fn nullable_previous_variable() -> ChainedVariableDescriptor<RouteSolution> {
    previous_variable().with_allows_unassigned(true)
}

/// O(1) inverse supply reading the solution's `next_visits` index.
pub fn next_visit_supply() -> SolutionInverseSupply<RouteSolution> {
    SolutionInverseSupply::new(next_visit)
}

/// Negative total travel distance; every unassigned visit costs 1000.
pub fn calculate_distance(s: &RouteSolution) -> SimpleScore {
    let mut distance = 0;
    for visit in &s.visits {
        match visit.previous {
            Some(previous) => distance += (s.location_of(previous) - visit.location).abs(),
            None => distance += 1000,
        }
    }
    SimpleScore::of(-distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chains() {
        let s = RouteSolution::from_chains(2, 4, &[&[0, 1, 2], &[3]]);

        assert_eq!(s.visits[0].previous, Some(ChainedValue::Anchor(0)));
        assert_eq!(s.visits[2].previous, Some(ChainedValue::Entity(1)));
        assert_eq!(s.visits[3].previous, Some(ChainedValue::Anchor(1)));
        assert_eq!(next_visit(&s, ChainedValue::Entity(0)), Some(1));
        assert_eq!(next_visit(&s, ChainedValue::Entity(2)), None);
    }

    #[test]
    fn test_unassigned_visits() {
        let s = RouteSolution::from_chains(1, 3, &[&[1]]);

        assert_eq!(s.visits[0].previous, None);
        assert_eq!(s.chains(), vec![vec![1]]);
    }

    #[test]
    fn test_setter_maintains_inverse() {
        let mut s = RouteSolution::from_chains(2, 2, &[&[0, 1], &[]]);

        set_previous(&mut s, 1, Some(ChainedValue::Anchor(1)));

        assert_eq!(next_visit(&s, ChainedValue::Entity(0)), None);
        assert_eq!(next_visit(&s, ChainedValue::Anchor(1)), Some(1));
        assert_eq!(s.chains(), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_calculate_distance() {
        // depot(0) -> 10 -> 20 : distance 20
        let s = RouteSolution::from_chains(1, 2, &[&[0, 1]]);
        assert_eq!(calculate_distance(&s), SimpleScore::of(-20));

        let s = RouteSolution::from_chains(1, 2, &[&[0]]);
        assert_eq!(calculate_distance(&s), SimpleScore::of(-1010));
    }
}
