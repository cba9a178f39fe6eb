//! Terminal rendering of room and guest records.

use frontdesk::{Room, RoomStatus, Stats};

/// Full room card; guest details only when someone is in the room.
pub fn print_room(room: &Room) {
    println!("room {}", room.number);
    println!("  type:   {}", room.kind);
    println!("  status: {}", room.status);
    println!("  price:  {:.2}/night", room.price_per_night);
    if room.status == RoomStatus::Occupied {
        println!("  checked in at: {} (unix)", room.check_in_time);
        println!("  guest:   {}", room.guest.name);
        println!("  id card: {}", room.guest.id_card);
        if !room.guest.phone.is_empty() {
            println!("  phone:   {}", room.guest.phone);
        }
        if !room.guest.address.is_empty() {
            println!("  address: {}", room.guest.address);
        }
    }
}

/// One-line listing form.
pub fn print_room_brief(room: &Room) {
    println!(
        "room {:<5} {:<16} {:<12} {:>8.2}/night",
        room.number,
        room.kind.as_str(),
        room.status.as_str(),
        room.price_per_night
    );
}

pub fn print_stats(s: &Stats) {
    println!("total rooms:      {}", s.total);
    println!("occupied:         {}", s.occupied);
    println!("available:        {}", s.available);
    println!("cleaning:         {}", s.cleaning);
    println!("maintenance:      {}", s.maintenance);
    println!("accrued revenue:  {:.2}", s.revenue);
    match s.occupancy_rate {
        Some(rate) => println!("occupancy rate:   {:.2}%", rate),
        None => println!("occupancy rate:   n/a (no rooms)"),
    }
}
