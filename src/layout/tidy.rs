//! Linear-time tidy tree layout (Buchheim, Jünger, Leipert 2002) with d3-hierarchy's
//! separation and size-fitting rules.

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::FibTreeResult;
use crate::layout::{Hierarchy, TreeLayout};

/// Tidy tree strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct TidyLayout;

impl TreeLayout for TidyLayout {
    fn name(&self) -> &'static str {
        "tidy"
    }

    fn place(&self, hierarchy: &Hierarchy, area: Rect) -> FibTreeResult<Vec<Point>> {
        let mut walk = Walk::new(hierarchy);
        walk.first_walk(0);
        let x = walk.second_walk();
        Ok(fit(hierarchy, &x, area))
    }
}

/// Per-slot working state of the two walks.
struct Walk<'a> {
    h: &'a Hierarchy,
    /// Preliminary x.
    prelim: Vec<f64>,
    /// Modifier applied to the whole subtree.
    modifier: Vec<f64>,
    change: Vec<f64>,
    shift: Vec<f64>,
    thread: Vec<Option<usize>>,
    ancestor: Vec<usize>,
    /// Default ancestor, stored on the parent while its children are apportioned.
    default_ancestor: Vec<Option<usize>>,
}

impl<'a> Walk<'a> {
    fn new(h: &'a Hierarchy) -> Self {
        let n = h.len();
        Self {
            h,
            prelim: vec![0.0; n],
            modifier: vec![0.0; n],
            change: vec![0.0; n],
            shift: vec![0.0; n],
            thread: vec![None; n],
            ancestor: (0..n).collect(),
            default_ancestor: vec![None; n],
        }
    }

    fn children(&self, v: usize) -> &'a [usize] {
        let h: &'a Hierarchy = self.h;
        &h.slots()[v].children
    }

    fn next_left(&self, v: usize) -> Option<usize> {
        self.children(v).first().copied().or(self.thread[v])
    }

    fn next_right(&self, v: usize) -> Option<usize> {
        self.children(v).last().copied().or(self.thread[v])
    }

    /// Post-order: left subtree, right subtree, then `v`.
    fn first_walk(&mut self, v: usize) {
        for &c in self.children(v) {
            self.first_walk(c);
        }

        let h = self.h;
        let slot = &h.slots()[v];
        let left_sibling = match slot.parent {
            Some(p) if slot.index > 0 => Some(self.children(p)[slot.index - 1]),
            _ => None,
        };

        let children = self.children(v);
        if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
            self.execute_shifts(v);
            let midpoint = (self.prelim[first] + self.prelim[last]) / 2.0;
            if let Some(w) = left_sibling {
                self.prelim[v] = self.prelim[w] + h.separation(v, w);
                self.modifier[v] = self.prelim[v] - midpoint;
            } else {
                self.prelim[v] = midpoint;
            }
        } else if let Some(w) = left_sibling {
            self.prelim[v] = self.prelim[w] + h.separation(v, w);
        }

        if let Some(p) = slot.parent {
            let fallback = self.default_ancestor[p].unwrap_or(self.children(p)[0]);
            self.default_ancestor[p] = Some(self.apportion(v, left_sibling, fallback));
        }
    }

    fn apportion(&mut self, v: usize, left_sibling: Option<usize>, mut ancestor: usize) -> usize {
        let Some(w) = left_sibling else {
            return ancestor;
        };
        let Some(parent) = self.h.slots()[v].parent else {
            return ancestor;
        };

        // i = inside contour, o = outside contour; p = right subtree (v), m = left forest.
        let mut vop = v;
        let mut vom = self.children(parent)[0];
        let mut sip = self.modifier[v];
        let mut sop = self.modifier[v];
        let mut sim = self.modifier[w];
        let mut som = self.modifier[vom];

        let mut vim = self.next_right(w);
        let mut vip = self.next_left(v);
        while let (Some(im), Some(ip)) = (vim, vip) {
            if let Some(next) = self.next_left(vom) {
                vom = next;
            }
            if let Some(next) = self.next_right(vop) {
                vop = next;
            }
            self.ancestor[vop] = v;

            let shift = self.prelim[im] + sim - self.prelim[ip] - sip + self.h.separation(im, ip);
            if shift > 0.0 {
                let wm = self.next_ancestor(im, v, ancestor);
                self.move_subtree(wm, v, shift);
                sip += shift;
                sop += shift;
            }

            sim += self.modifier[im];
            sip += self.modifier[ip];
            som += self.modifier[vom];
            sop += self.modifier[vop];

            vim = self.next_right(im);
            vip = self.next_left(ip);
        }

        if let Some(im) = vim
            && self.next_right(vop).is_none()
        {
            self.thread[vop] = Some(im);
            self.modifier[vop] += sim - sop;
        }
        if let Some(ip) = vip
            && self.next_left(vom).is_none()
        {
            self.thread[vom] = Some(ip);
            self.modifier[vom] += sip - som;
            ancestor = v;
        }
        ancestor
    }

    fn next_ancestor(&self, vim: usize, v: usize, fallback: usize) -> usize {
        let a = self.ancestor[vim];
        if self.h.slots()[a].parent == self.h.slots()[v].parent {
            a
        } else {
            fallback
        }
    }

    fn move_subtree(&mut self, wm: usize, wp: usize, shift: f64) {
        let h = self.h;
        let slots = h.slots();
        let span = slots[wp].index.saturating_sub(slots[wm].index).max(1) as f64;
        let change = shift / span;
        self.change[wp] -= change;
        self.shift[wp] += shift;
        self.change[wm] += change;
        self.prelim[wp] += shift;
        self.modifier[wp] += shift;
    }

    fn execute_shifts(&mut self, v: usize) {
        let mut shift = 0.0;
        let mut change = 0.0;
        for &w in self.children(v).iter().rev() {
            self.prelim[w] += shift;
            self.modifier[w] += shift;
            change += self.change[w];
            shift += self.shift[w] + change;
        }
    }

    /// Accumulate modifiers top-down; slots are in pre-order so parents come first.
    fn second_walk(mut self) -> Vec<f64> {
        let n = self.h.len();
        let mut x = vec![0.0; n];
        for v in 0..n {
            let parent_mod = match self.h.slots()[v].parent {
                Some(p) => self.modifier[p],
                // The virtual root parent cancels the root's preliminary x.
                None => -self.prelim[v],
            };
            x[v] = self.prelim[v] + parent_mod;
            self.modifier[v] += parent_mod;
        }
        x
    }
}

/// Scale abstract x/depth into `area`, keeping half a separation unit at each side.
fn fit(h: &Hierarchy, x: &[f64], area: Rect) -> Vec<Point> {
    let mut left = 0;
    let mut right = 0;
    for v in 1..x.len() {
        if x[v] < x[left] {
            left = v;
        }
        if x[v] > x[right] {
            right = v;
        }
    }

    let s = if left == right {
        1.0
    } else {
        h.separation(left, right) / 2.0
    };
    let tx = s - x[left];
    let kx = area.width() / (x[right] + s + tx);
    let ky = area.height() / f64::from(h.max_depth().max(1));

    h.slots()
        .iter()
        .zip(x)
        .map(|(slot, &xv)| {
            Point::new(
                area.x0 + (xv + tx) * kx,
                area.y0 + f64::from(slot.depth) * ky,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tidy.rs"]
mod tests;
