pub mod booked_show_detail;
pub mod booking;
pub mod booking_seat;
pub mod movie;
pub mod screen;
pub mod screen_seat_type;
pub mod seat;
pub mod show_detail;
pub mod show_seat_price;
pub mod user;
