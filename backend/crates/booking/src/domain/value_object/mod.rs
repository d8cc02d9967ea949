pub mod booking_status;
