//! Structural invariant checks over the whole Docker.

use std::collections::BTreeSet;

use dockyard_common::{FrameId, SplitterId};

use crate::tree::NodeId;

use super::Docker;

impl Docker {
    /// Verify the tree is in a stable, valid state.
    ///
    /// Every splitter has two children that point back at it, every frame
    /// except the center holds at least one panel, the center is reachable
    /// from the root, and every arena entry is either in the tree or a
    /// floater. Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut frames = BTreeSet::new();
        let mut splitters = BTreeSet::new();

        if self.parent_of(self.root).is_some() {
            return Err(format!("root {:?} has a parent", self.root));
        }
        self.check_node(self.root, None, &mut frames, &mut splitters)?;

        if !frames.contains(&self.center) {
            return Err("center frame is not reachable from the root".into());
        }
        for (id, frame) in &self.frames {
            if frame.is_floating() {
                if frame.parent.is_some() {
                    return Err(format!("floating {id} has a parent"));
                }
            } else if !frames.contains(id) {
                return Err(format!("docked {id} is not in the tree"));
            }
        }
        if let Some(orphan) = self.splitters.keys().find(|id| !splitters.contains(*id)) {
            return Err(format!("{orphan} is not in the tree"));
        }

        self.check_frames()?;
        self.check_panels()
    }

    fn check_node(
        &self,
        node: NodeId,
        parent: Option<SplitterId>,
        frames: &mut BTreeSet<FrameId>,
        splitters: &mut BTreeSet<SplitterId>,
    ) -> Result<(), String> {
        if self.parent_of(node) != parent {
            return Err(format!("{node:?} does not point back at {parent:?}"));
        }
        match node {
            NodeId::Frame(id) => {
                let frame = self
                    .frames
                    .get(&id)
                    .ok_or_else(|| format!("tree references missing {id}"))?;
                if frame.is_floating() {
                    return Err(format!("floating {id} is in the split tree"));
                }
                if !frames.insert(id) {
                    return Err(format!("{id} appears twice in the tree"));
                }
                Ok(())
            }
            NodeId::Splitter(id) => {
                let splitter = self
                    .splitters
                    .get(&id)
                    .ok_or_else(|| format!("tree references missing {id}"))?;
                if !splitters.insert(id) {
                    return Err(format!("{id} appears twice in the tree"));
                }
                if !splitter.is_complete() {
                    return Err(format!("{id} does not have two children"));
                }
                for child in splitter.children() {
                    self.check_node(child, Some(id), frames, splitters)?;
                }
                Ok(())
            }
        }
    }

    fn check_frames(&self) -> Result<(), String> {
        for (id, frame) in &self.frames {
            if frame.is_center() != (*id == self.center) {
                return Err(format!("{id} has the wrong center flag"));
            }
            if *id == self.center {
                if frame.panels() != [self.center_panel].as_slice() {
                    return Err("center frame must hold only the center panel".into());
                }
            } else if frame.is_empty() {
                return Err(format!("{id} has no panels"));
            }

            let active = frame.active_index();
            let in_range = if frame.is_empty() {
                active == -1
            } else {
                active >= 0 && (active as usize) < frame.len()
            };
            if !in_range {
                return Err(format!("{id} has active tab {active} out of range"));
            }
            for panel in frame.panels() {
                match self.panels.get(panel) {
                    Some(p) if p.frame == Some(*id) => {}
                    Some(_) => return Err(format!("{panel} in {id} points elsewhere")),
                    None => return Err(format!("{id} holds missing {panel}")),
                }
            }
        }
        Ok(())
    }

    fn check_panels(&self) -> Result<(), String> {
        for (id, panel) in &self.panels {
            let Some(frame) = panel.frame else {
                return Err(format!("{id} is not in any frame"));
            };
            let listed = self.frames.get(&frame).is_some_and(|f| f.contains(*id));
            if !listed {
                return Err(format!("{id} claims {frame} but is not listed there"));
            }
        }
        Ok(())
    }
}
