use etude::freq::frequency_pairs;
use etude::list::{CircularList, DoublyLinkedList};
use etude::numeric::{fast_powf, fast_powi, IntType};
use etude::search::find_all;
use etude::sort::quick_sort;
use etude::stack::Stack;
use etude::subset::is_subset_sum;

pub const DEMOS: &[(&str, fn())] = &[
    ("stack", stack),
    ("lists", lists),
    ("power", power),
    ("frequency", frequency),
    ("quicksort", quicksort),
    ("subset-sum", subset_sum),
    ("search", search),
];

pub fn find(name: &str) -> Option<fn()> {
    DEMOS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

fn push_report(stack: &mut Stack<IntType>, value: IntType) {
    match stack.push(value) {
        Ok(()) => println!("{} pushed to stack.", value),
        Err(e) => println!("Stack Overflow! Cannot push {}", e.into_value()),
    }
}

fn pop_report(stack: &mut Stack<IntType>) {
    match stack.pop() {
        Some(value) => println!("{} popped from stack.", value),
        None => println!("Stack Underflow! Cannot pop."),
    }
}

fn stack() {
    let mut stack = Stack::new(5).unwrap();
    for &v in &[10, 20, 30] {
        push_report(&mut stack, v);
    }
    if let Some(&v) = stack.top() {
        println!("Top element: {}", v);
    }
    pop_report(&mut stack);
    if let Some(&v) = stack.top() {
        println!("Top element after pop: {}", v);
    }
    for &v in &[40, 50, 60, 70] {
        push_report(&mut stack, v);
    }
    while let Some(&v) = stack.top() {
        println!("Popping: {}", v);
        pop_report(&mut stack);
    }
    println!("Stack is empty!");
    pop_report(&mut stack);
}

fn show(label: &str, values: &[IntType]) {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    if rendered.is_empty() {
        println!("{}: empty", label);
    } else {
        println!("{}: {}", label, rendered.join(" "));
    }
}

fn lists() {
    let mut dlist = DoublyLinkedList::new();
    dlist.push_front(11);
    dlist.push_back(25);
    dlist.push_front(6);
    show("doubly", &dlist.to_vec());
    if let Some(v) = dlist.pop_front() {
        println!("{} deleted from front", v);
    }
    if let Some(v) = dlist.pop_back() {
        println!("{} deleted from back", v);
    }
    show("doubly", &dlist.to_vec());

    let mut clist = CircularList::new();
    clist.push_front(15);
    clist.push_back(30);
    clist.push_front(7);
    show("circular", &clist.to_vec());
    if let Some(v) = clist.pop_front() {
        println!("{} deleted from front", v);
    }
    if let Some(v) = clist.pop_back() {
        println!("{} deleted from back", v);
    }
    show("circular", &clist.to_vec());
}

fn power() {
    println!("2^10 = {}", fast_powf(2.0, 10));
    println!("2^-2 = {}", fast_powf(2.0, -2));
    println!("1.5^7 = {}", fast_powf(1.5, 7));
    for &(base, exp) in &[(3, 30), (10, 40)] {
        match fast_powi(base, exp) {
            Ok(v) => println!("{}^{} = {}", base, exp, v),
            Err(e) => println!("{}^{}: {}", base, exp, e),
        }
    }
}

fn frequency() {
    let data = [10, 20, 20, 10, 10, 20, 5, 20];
    show("input", &data);
    for (value, count) in frequency_pairs(&data) {
        println!("{} occurs {} times", value, count);
    }
}

fn quicksort() {
    let mut data = [4, 1, 3, 9, 7, 0, 8, 2];
    show("before", &data);
    quick_sort(&mut data);
    show("after", &data);
}

fn subset_sum() {
    let items = [3, 34, 4, 12, 5, 2];
    for &target in &[9, 30] {
        if is_subset_sum(&items, target) {
            println!("a subset of {:?} sums to {}", items, target);
        } else {
            println!("no subset of {:?} sums to {}", items, target);
        }
    }
}

fn search() {
    let text = "ababcabcabababd";
    for pattern in &["ababd", "abc", "zz"] {
        let found = find_all(text, pattern);
        if found.is_empty() {
            println!("{} not found in {}", pattern, text);
        } else {
            println!("{} found in {} at {:?}", pattern, text, found);
        }
    }
}
