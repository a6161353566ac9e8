//! Round-robin technician assignment for imaging appointments.
//!
//! # Algorithm
//!
//! Technicians sit in a fixed circular order with a cursor on the one
//! whose turn is next. For a request (room, date, slot), starting at the
//! cursor and visiting each technician at most once:
//! 1. Skip the technician if they already have an imaging appointment at
//!    that (date, slot).
//! 2. Skip the technician if another technician at the same location is
//!    already using the same room type at that (date, slot).
//! 3. Otherwise assign them and move the cursor just past them.
//!
//! If the walk comes back around, nobody is free and the cursor stays
//! where it was. Skipped technicians keep their place in line.
//!
//! # Complexity
//! O(t × a) per request, where t = technicians and a = booked
//! appointments. Roster and calendar sizes keep this small.

use tracing::{debug, warn};

use crate::models::{
    AppointmentBook, CalendarDate, Person, Radiology, Technician, Timeslot,
};
use crate::validation::Rejection;

/// Circular technician rotation with a persistent "next up" cursor.
#[derive(Debug, Clone, Default)]
pub struct TechnicianRotation {
    technicians: Vec<Technician>,
    cursor: usize,
}

impl TechnicianRotation {
    /// Creates a rotation in the given order, cursor on the first entry.
    pub fn new(technicians: Vec<Technician>) -> Self {
        Self {
            technicians,
            cursor: 0,
        }
    }

    /// Number of technicians in the rotation.
    pub fn len(&self) -> usize {
        self.technicians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.technicians.is_empty()
    }

    /// The technician whose turn is next.
    pub fn next_up(&self) -> Option<&Technician> {
        self.technicians.get(self.cursor)
    }

    /// Technicians in turn order, starting at the cursor.
    pub fn order(&self) -> impl Iterator<Item = &Technician> {
        let n = self.technicians.len();
        (0..n).map(move |i| &self.technicians[(self.cursor + i) % n])
    }

    /// Whether `technician` could take an imaging appointment in `room`
    /// at `(date, timeslot)` given what is already booked.
    pub fn is_available(
        technician: &Technician,
        room: Radiology,
        date: CalendarDate,
        timeslot: Timeslot,
        book: &AppointmentBook,
    ) -> bool {
        for booked in book.at_slot(date, timeslot) {
            let (Some(other), Some(other_room)) =
                (booked.provider().as_technician(), booked.room())
            else {
                continue;
            };
            if other.profile() == technician.profile() {
                return false;
            }
            if other.location() == technician.location() && other_room == room {
                return false;
            }
        }
        true
    }

    /// Picks the next free technician for `room` at `(date, timeslot)`.
    ///
    /// On success the cursor moves to the technician after the one
    /// returned. On failure nothing changes.
    pub fn assign(
        &mut self,
        room: Radiology,
        date: CalendarDate,
        timeslot: Timeslot,
        book: &AppointmentBook,
    ) -> Result<Technician, Rejection> {
        let n = self.technicians.len();
        for step in 0..n {
            let index = (self.cursor + step) % n;
            let candidate = &self.technicians[index];
            if Self::is_available(candidate, room, date, timeslot, book) {
                debug!(
                    "Assigned technician {} for {} at {} slot {}",
                    candidate.profile(),
                    room.name(),
                    date,
                    timeslot.code()
                );
                let assigned = candidate.clone();
                self.cursor = (index + 1) % n;
                return Ok(assigned);
            }
            debug!(
                "Technician {} unavailable for {} at {} slot {}",
                candidate.profile(),
                room.name(),
                date,
                timeslot.code()
            );
        }

        warn!(
            "No technician available for {} at {} slot {}",
            room.name(),
            date,
            timeslot.code()
        );
        Err(Rejection::no_technician(room, timeslot))
    }
}
