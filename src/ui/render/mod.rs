mod all;
mod footer;
mod form;
mod header;
mod log;

use self::log::log;
use footer::footer;
use form::form;
use header::header;

pub use all::all as render;
