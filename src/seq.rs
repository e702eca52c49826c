// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use std::fmt;

/// Display a sequence as `{a, b, c}`.
///
/// Any cloneable iterable of displayable items works, including slices, vectors by reference and
/// iterator adapters, so sequences nest.
///
/// # Examples
///
/// ```
/// use checklog::seq;
///
/// let shape = vec![1, 224, 224, 3];
/// assert_eq!(seq(&shape).to_string(), "{1, 224, 224, 3}");
///
/// let empty: [u8; 0] = [];
/// assert_eq!(seq(&empty).to_string(), "{}");
///
/// let nested = vec![vec![1, 2], vec![3]];
/// assert_eq!(seq(nested.iter().map(seq)).to_string(), "{{1, 2}, {3}}");
/// ```
pub fn seq<I>(items: I) -> Seq<I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    Seq(items)
}

/// The wrapper returned by [`seq`].
#[derive(Clone, Copy, Debug)]
pub struct Seq<I>(I);

impl<I> fmt::Display for Seq<I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.0.clone().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}
