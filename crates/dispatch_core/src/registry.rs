//! Vehicle registry: the single source of truth for vehicles and their availability.
//!
//! Vehicles are kept in registration order, which is the tie-break order used by
//! matching. The vehicle list sits behind an `RwLock` that is only written on
//! registration; everything else takes the read lock and works on per-vehicle state:
//!
//! - **availability**: an `AtomicBool`, flipped only through compare-and-set by the
//!   matcher (reserve) and the trip lifecycle (release), so a vehicle leaves the
//!   pool only together with a request binding
//! - **position**: a `Mutex<Point>` updated by whatever layer moves vehicles
//!
//! All guarded data is plain values, so poisoned locks are recovered rather than
//! propagated.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard};

use crate::error::{DispatchError, Result};
use crate::geometry::Point;
use crate::vehicle::{Tier, TierFilter, Vehicle, VehicleId};

#[derive(Debug)]
struct VehicleSlot {
    id: VehicleId,
    tier: Tier,
    position: Mutex<Point>,
    available: AtomicBool,
}

impl VehicleSlot {
    fn from_vehicle(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            tier: vehicle.tier,
            position: Mutex::new(vehicle.position),
            available: AtomicBool::new(vehicle.available),
        }
    }

    fn position(&self) -> Point {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    fn snapshot(&self) -> Vehicle {
        Vehicle {
            id: self.id,
            position: self.position(),
            tier: self.tier,
            available: self.is_available(),
        }
    }

    /// Flip availability from `from` to `!from`. Returns false if another caller got there first.
    fn transition(&self, from: bool) -> bool {
        self.available
            .compare_exchange(from, !from, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    slots: Vec<VehicleSlot>,
    index: HashMap<VehicleId, usize>,
}

impl RegistryInner {
    fn slot(&self, id: VehicleId) -> Result<&VehicleSlot> {
        self.index
            .get(&id)
            .map(|&i| &self.slots[i])
            .ok_or(DispatchError::UnknownVehicle(id))
    }
}

#[derive(Debug, Default)]
pub struct VehicleRegistry {
    inner: RwLock<RegistryInner>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an available vehicle.
    pub fn register(&self, id: VehicleId, position: Point, tier: Tier) -> Result<Vehicle> {
        self.register_vehicle(Vehicle::new(id, position, tier))
    }

    /// Register a vehicle with the availability carried by `vehicle`.
    pub fn register_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.index.contains_key(&vehicle.id) {
            return Err(DispatchError::DuplicateId(vehicle.id));
        }
        let slot_index = inner.slots.len();
        inner.slots.push(VehicleSlot::from_vehicle(vehicle));
        inner.index.insert(vehicle.id, slot_index);
        log::debug!(
            "registered vehicle {} at {} ({:?}, available={})",
            vehicle.id,
            vehicle.position,
            vehicle.tier,
            vehicle.available
        );
        Ok(vehicle)
    }

    /// Every vehicle, in registration order.
    pub fn all(&self) -> Vec<Vehicle> {
        self.read().slots.iter().map(VehicleSlot::snapshot).collect()
    }

    /// Available vehicles admitted by `filter`, in registration order.
    pub fn available(&self, filter: TierFilter) -> Vec<Vehicle> {
        self.read()
            .slots
            .iter()
            .filter(|slot| filter.admits(slot.tier) && slot.is_available())
            .map(VehicleSlot::snapshot)
            .collect()
    }

    pub fn available_count(&self, filter: TierFilter) -> usize {
        self.read()
            .slots
            .iter()
            .filter(|slot| filter.admits(slot.tier) && slot.is_available())
            .count()
    }

    pub fn by_id(&self, id: VehicleId) -> Result<Vehicle> {
        self.read().slot(id).map(VehicleSlot::snapshot)
    }

    pub fn len(&self) -> usize {
        self.read().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().slots.is_empty()
    }

    /// Move a vehicle. Positions are owned by the layer that tracks vehicles in the field.
    pub fn update_position(&self, id: VehicleId, position: Point) -> Result<()> {
        let inner = self.read();
        let slot = inner.slot(id)?;
        *slot.position.lock().unwrap_or_else(PoisonError::into_inner) = position;
        Ok(())
    }

    /// Take a vehicle out of the available pool.
    ///
    /// Returns `Ok(false)` when the vehicle was already unavailable, in which case
    /// nothing changed.
    pub(crate) fn try_reserve(&self, id: VehicleId) -> Result<bool> {
        Ok(self.read().slot(id)?.transition(true))
    }

    /// Put a vehicle back into the available pool.
    ///
    /// Returns `Ok(false)` when the vehicle was already available.
    pub(crate) fn release(&self, id: VehicleId) -> Result<bool> {
        Ok(self.read().slot(id)?.transition(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_three() -> VehicleRegistry {
        let registry = VehicleRegistry::new();
        registry
            .register(VehicleId(1), Point::new(20.0, 0.0), Tier::Standard)
            .expect("register 1");
        registry
            .register(VehicleId(2), Point::new(0.0, 10.0), Tier::Comfort)
            .expect("register 2");
        registry
            .register(VehicleId(3), Point::new(7.0, 24.0), Tier::Premium)
            .expect("register 3");
        registry
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<u32> {
        vehicles.iter().map(|v| v.id.0).collect()
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = registry_with_three();
        let err = registry
            .register(VehicleId(2), Point::new(1.0, 1.0), Tier::Standard)
            .unwrap_err();
        assert_eq!(err, DispatchError::DuplicateId(VehicleId(2)));
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.by_id(VehicleId(2)).unwrap().position,
            Point::new(0.0, 10.0)
        );
    }

    #[test]
    fn all_preserves_registration_order() {
        let registry = VehicleRegistry::new();
        for id in [9, 3, 5, 1] {
            registry
                .register(VehicleId(id), Point::default(), Tier::Standard)
                .unwrap();
        }
        assert_eq!(ids(&registry.all()), vec![9, 3, 5, 1]);
    }

    #[test]
    fn available_filters_by_tier_and_availability() {
        let registry = registry_with_three();
        registry
            .register_vehicle(
                Vehicle::new(VehicleId(4), Point::new(3.0, 4.0), Tier::Premium).unavailable(),
            )
            .unwrap();

        assert_eq!(ids(&registry.available(TierFilter::Any)), vec![1, 2, 3]);
        assert_eq!(
            ids(&registry.available(TierFilter::Only(Tier::Premium))),
            vec![3]
        );
        assert_eq!(registry.available_count(TierFilter::Only(Tier::Comfort)), 1);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn unknown_lookup_fails() {
        let registry = registry_with_three();
        assert_eq!(
            registry.by_id(VehicleId(42)),
            Err(DispatchError::UnknownVehicle(VehicleId(42)))
        );
        assert_eq!(
            registry.try_reserve(VehicleId(42)),
            Err(DispatchError::UnknownVehicle(VehicleId(42)))
        );
        assert!(registry
            .update_position(VehicleId(42), Point::default())
            .is_err());
    }

    #[test]
    fn reserve_and_release_are_compare_and_set() {
        let registry = registry_with_three();
        assert_eq!(registry.try_reserve(VehicleId(1)), Ok(true));
        assert_eq!(registry.try_reserve(VehicleId(1)), Ok(false));
        assert!(!registry.by_id(VehicleId(1)).unwrap().available);
        assert_eq!(ids(&registry.available(TierFilter::Any)), vec![2, 3]);

        assert_eq!(registry.release(VehicleId(1)), Ok(true));
        assert_eq!(registry.release(VehicleId(1)), Ok(false));
        assert_eq!(ids(&registry.available(TierFilter::Any)), vec![1, 2, 3]);
    }

    #[test]
    fn position_updates_are_visible_in_snapshots() {
        let registry = registry_with_three();
        registry
            .update_position(VehicleId(3), Point::new(1.5, -2.0))
            .unwrap();
        assert_eq!(
            registry.by_id(VehicleId(3)).unwrap().position,
            Point::new(1.5, -2.0)
        );
    }

    #[test]
    fn empty_registry() {
        let registry = VehicleRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
        assert!(registry.available(TierFilter::Any).is_empty());
    }
}
