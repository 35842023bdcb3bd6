// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deletion cascades for weak references.
//!
//! A group is an organisational label, so deleting one only detaches the
//! todos that pointed at it. A task cannot exist without its category, so
//! deleting a category deletes its tasks. Both run inside the delete that
//! triggers them.

use focusdesk_domain::{Collection, EntityId, Task, Todo};

/// Clears the group reference of every todo pointing at `group_id`.
///
/// Returns the number of todos that were detached.
pub fn nullify_group_references(todos: &mut Collection<Todo>, group_id: EntityId) -> usize {
    let mut detached: usize = 0;
    for todo in todos
        .iter_mut()
        .filter(|todo| todo.group == Some(group_id))
    {
        todo.group = None;
        detached += 1;
    }
    detached
}

/// Removes every task recorded against `category_id`.
///
/// Returns the removed tasks in their original order.
pub fn cascade_delete_tasks(tasks: &mut Collection<Task>, category_id: EntityId) -> Vec<Task> {
    tasks.remove_where(|task| task.category == category_id)
}
