//! An [interval skip list]: an in-memory container mapping opaque markers to
//! closed intervals over a totally ordered index type, answering stabbing
//! and range queries ("which intervals contain this point / intersect this
//! range / start or end here") in expected `O(log n)`.
//!
//! The structure is a randomized skip list whose nodes are the distinct
//! interval endpoints. Each forward edge carries the markers of the
//! intervals covering its span, laid out along every interval's maximal
//! stair-step path, so a single tower descent collects all intervals
//! containing a point without walking them one by one.
//!
//! ```
//! use interval_skiplist::IntervalSkiplist;
//!
//! let mut list: IntervalSkiplist<i32, &str> = IntervalSkiplist::new(i32::MIN, i32::MAX);
//!
//! list.insert("a", 2, 7)?;
//! list.insert("b", 1, 5)?;
//!
//! assert_eq!(list.find_containing(&[2]), vec!["b", "a"]);
//! assert_eq!(list.find_ending_at(&5), vec!["b"]);
//! # Ok::<(), interval_skiplist::IntervalError>(())
//! ```
//!
//! [interval skip list]: https://en.wikipedia.org/wiki/Interval_skip_list

mod error;
mod interface;
mod list;
mod marker_set;
mod node_heights;


pub use self::error::{IntervalError, Result};
pub use self::interface::{Comparator, DefaultComparator};
pub use self::list::{Interval, IntervalSkiplist};
