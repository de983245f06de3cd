use std::collections::{HashSet, VecDeque};

use crate::{ContextSwitch, Cpu, Dispatcher, Pcb, Pid, Policy, ReadyQueue, Scheduler, Simulation};

fn pcb(pid: usize, time_left: f32, priority: i32) -> Pcb {
    Pcb::new(Pid::new(pid), time_left, priority)
}

fn simulation(policy: Policy, queue: Vec<Pcb>) -> Simulation {
    Simulation::with_queue(policy, VecDeque::from(queue))
}

fn queued_pids(sim: &Simulation) -> Vec<usize> {
    sim.ready_queue().iter().map(|p| p.pid.get()).collect()
}

fn running_pid(sim: &Simulation) -> Option<usize> {
    sim.cpu().current().map(|p| p.pid.get())
}

fn switch(incoming: usize, outgoing: Option<usize>, steps: usize) -> ContextSwitch {
    ContextSwitch {
        incoming: Pid::new(incoming),
        outgoing: outgoing.map(Pid::new),
        clock: crate::Timestamp::new(steps),
    }
}

#[test]
fn fcfs_loads_head_only_when_idle() {
    let mut sim = simulation(Policy::Fcfs, vec![pcb(1, 3.0, 0), pcb(2, 1.0, 0)]);

    assert_eq!(sim.tick(), Ok(Some(switch(1, None, 0))));
    assert_eq!(running_pid(&sim), Some(1));
    assert_eq!(queued_pids(&sim), vec![2]);

    /* Busy CPU, FCFS never preempts even for a shorter job */
    for _ in 0..5 {
        assert_eq!(sim.tick(), Ok(None));
        assert_eq!(sim.scheduler().next_index(), Some(0));
    }
    assert_eq!(running_pid(&sim), Some(1));
}

#[test]
fn idle_switch_costs_no_clock_and_requeues_nothing() {
    let mut sim = simulation(Policy::Fcfs, vec![pcb(1, 3.0, 0)]);

    sim.tick().unwrap();

    assert_eq!(sim.clock().steps(), 0);
    assert!(sim.ready_queue().is_empty());
    let running = sim.cpu().current().unwrap();
    assert_eq!(running.wait_time, 0.0);
    assert_eq!(running.num_context, 0);
}

#[test]
fn srtf_picks_leftmost_shortest() {
    let mut sim = simulation(Policy::Srtf, vec![pcb(1, 3.0, 0), pcb(2, 4.0, 0), pcb(3, 3.0, 0)]);
    sim.cpu_mut().install(pcb(9, 5.0, 0));

    assert_eq!(sim.tick(), Ok(Some(switch(1, Some(9), 1))));
    assert_eq!(sim.scheduler().next_index(), Some(0));
    assert_eq!(queued_pids(&sim), vec![2, 3, 9]);

    let running = sim.cpu().current().unwrap();
    assert_eq!(running.wait_time, 0.5);

    let evicted = sim.ready_queue().get(2).unwrap();
    assert_eq!(evicted.num_context, 1);
    assert_eq!(evicted.wait_time, 0.0);
}

#[test]
fn srtf_keeps_running_process_on_tie() {
    let mut sim = simulation(Policy::Srtf, vec![pcb(1, 2.0, 0), pcb(2, 3.0, 0)]);
    sim.cpu_mut().install(pcb(9, 2.0, 0));

    assert_eq!(sim.tick(), Ok(None));
    assert_eq!(sim.scheduler().next_index(), None);
    assert_eq!(running_pid(&sim), Some(9));
}

#[test]
fn srtf_on_idle_cpu_picks_shortest_not_head() {
    let mut sim = simulation(Policy::Srtf, vec![pcb(1, 4.0, 0), pcb(2, 2.0, 0), pcb(3, 2.0, 0)]);

    assert_eq!(sim.tick(), Ok(Some(switch(2, None, 0))));
    assert_eq!(queued_pids(&sim), vec![1, 3]);
}

#[test]
fn round_robin_switches_when_quantum_runs_out() {
    let mut sim = simulation(
        Policy::RoundRobin { quantum: 2.0 },
        vec![pcb(1, 10.0, 0), pcb(2, 10.0, 0)],
    );

    assert_eq!(sim.tick(), Ok(Some(switch(1, None, 0))));
    assert_eq!(sim.scheduler().quantum_left(), Some(2.0));

    for expected in [1.5, 1.0, 0.5] {
        assert_eq!(sim.tick(), Ok(None));
        assert_eq!(sim.scheduler().quantum_left(), Some(expected));
    }

    /* Fourth decrement reaches 0 and the check fires in the same call */
    assert_eq!(sim.tick(), Ok(Some(switch(2, Some(1), 1))));
    assert_eq!(sim.scheduler().quantum_left(), Some(2.0));
    assert_eq!(queued_pids(&sim), vec![1]);
}

#[test]
fn evicted_process_keeps_its_counters() {
    let mut sim = simulation(
        Policy::RoundRobin { quantum: 1.0 },
        vec![pcb(1, 10.0, 0), pcb(2, 10.0, 0)],
    );

    sim.tick().unwrap();
    sim.tick().unwrap();
    assert_eq!(sim.tick(), Ok(Some(switch(2, Some(1), 1))));
    sim.tick().unwrap();
    assert_eq!(sim.tick(), Ok(Some(switch(1, Some(2), 2))));

    let back = sim.cpu().current().unwrap();
    assert_eq!(back.num_context, 1);
    assert_eq!(back.wait_time, 0.5);

    let waiting = sim.ready_queue().head().unwrap();
    assert_eq!(waiting.pid, Pid::new(2));
    assert_eq!(waiting.num_context, 1);
    assert_eq!(waiting.wait_time, 0.5);
}

#[test]
fn priority_tie_does_not_preempt() {
    let mut sim = simulation(Policy::PreemptivePriority { quantum: 2.0 }, vec![pcb(1, 5.0, 2)]);
    sim.cpu_mut().install(pcb(9, 5.0, 2));

    assert_eq!(sim.tick(), Ok(None));
    assert_eq!(sim.scheduler().quantum_left(), Some(1.0));

    /* Quantum runs out, but nobody better is waiting */
    assert_eq!(sim.tick(), Ok(None));
    assert_eq!(sim.scheduler().quantum_left(), Some(0.0));
    assert_eq!(running_pid(&sim), Some(9));
}

#[test]
fn priority_preempts_for_better_priority() {
    let mut sim = simulation(
        Policy::PreemptivePriority { quantum: 4.0 },
        vec![pcb(1, 5.0, 5), pcb(2, 5.0, 1), pcb(3, 5.0, 1)],
    );
    sim.cpu_mut().install(pcb(9, 5.0, 3));

    assert_eq!(sim.tick(), Ok(Some(switch(2, Some(9), 1))));
    assert_eq!(sim.scheduler().quantum_left(), Some(4.0));
    assert_eq!(queued_pids(&sim), vec![1, 3, 9]);
}

#[test]
fn priority_on_idle_cpu_takes_best_candidate() {
    let mut sim = simulation(
        Policy::PreemptivePriority { quantum: 2.0 },
        vec![pcb(1, 5.0, 5), pcb(2, 5.0, 2), pcb(3, 5.0, 2)],
    );

    assert_eq!(sim.tick(), Ok(Some(switch(2, None, 0))));
    assert_eq!(sim.scheduler().next_index(), Some(1));
}

#[test]
fn empty_queue_only_moves_the_quantum() {
    let mut scheduler = Scheduler::new(Policy::RoundRobin { quantum: 1.0 });
    let dispatcher = Dispatcher::new();
    scheduler.attach_dispatcher(&dispatcher);

    let queue: VecDeque<Pcb> = VecDeque::new();
    scheduler.execute(&queue, &Cpu::new());

    assert_eq!(scheduler.quantum_left(), Some(0.5));
    assert_eq!(scheduler.next_index(), None);
    assert!(!dispatcher.is_pending());
}

#[test]
fn second_dispatcher_is_ignored() {
    let mut scheduler = Scheduler::new(Policy::Fcfs);
    let first = Dispatcher::new();
    let second = Dispatcher::new();
    scheduler.attach_dispatcher(&first);
    scheduler.attach_dispatcher(&second);

    let queue = VecDeque::from(vec![pcb(1, 1.0, 0)]);
    scheduler.execute(&queue, &Cpu::new());

    assert!(first.is_pending());
    assert!(!second.is_pending());
}

#[test]
fn scheduler_without_dispatcher_still_decides() {
    let mut scheduler = Scheduler::new(Policy::Srtf);
    let queue = VecDeque::from(vec![pcb(1, 3.0, 0), pcb(2, 1.0, 0)]);

    scheduler.execute(&queue, &Cpu::new());
    assert_eq!(scheduler.next_index(), Some(1));
}

#[test]
fn every_process_is_in_exactly_one_place() {
    let policies = [
        Policy::Fcfs,
        Policy::Srtf,
        Policy::RoundRobin { quantum: 1.0 },
        Policy::PreemptivePriority { quantum: 1.0 },
    ];

    for policy in policies {
        let mut sim = simulation(policy, vec![pcb(1, 1.0, 2), pcb(2, 1.5, 1), pcb(3, 0.5, 3)]);
        let mut active: HashSet<usize> = [1, 2, 3].into_iter().collect();

        for _ in 0..100 {
            if sim.is_finished() {
                break;
            }

            sim.tick().unwrap();

            let mut seen = queued_pids(&sim);
            seen.extend(running_pid(&sim));
            let unique: HashSet<usize> = seen.iter().copied().collect();
            assert_eq!(seen.len(), unique.len(), "{:?}: duplicate process", policy);
            assert_eq!(unique, active, "{:?}: lost process", policy);

            if let Some(running) = sim.cpu_mut().current_mut() {
                running.execute();
                if running.is_finished() {
                    let done = sim.cpu_mut().take().unwrap();
                    active.remove(&done.pid.get());
                }
            }
        }

        assert!(sim.is_finished(), "{:?} did not finish", policy);
        assert!(active.is_empty());
    }
}

#[test]
fn constructors_pick_their_policy() {
    assert_eq!(crate::fcfs().scheduler().policy(), Policy::Fcfs);
    assert_eq!(crate::srtf().scheduler().policy(), Policy::Srtf);

    let rr = crate::round_robin(1.5);
    assert_eq!(rr.scheduler().policy(), Policy::RoundRobin { quantum: 1.5 });
    assert_eq!(rr.scheduler().quantum_left(), Some(1.5));

    let pp = crate::preemptive_priority(2.0);
    assert_eq!(pp.scheduler().policy(), Policy::PreemptivePriority { quantum: 2.0 });
    assert_eq!(pp.scheduler().quantum_left(), Some(2.0));
}

#[test]
fn constructed_simulation_runs_admitted_processes() {
    let mut sim = crate::srtf();
    assert!(sim.is_finished());

    sim.admit(pcb(1, 2.0, 0));
    sim.admit(pcb(2, 1.0, 0));

    assert_eq!(sim.tick(), Ok(Some(switch(2, None, 0))));
    assert_eq!(queued_pids(&sim), vec![1]);
    assert!(!sim.is_finished());
}
