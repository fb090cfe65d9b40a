//! Closure semantics
//!
//! Functions capture the scope they were declared in, by reference:
//! - Captured variables outlive the call that created them
//! - Each call creates a fresh scope, so counters are independent
//! - Mutation through one closure is visible through every other closure
//!   sharing the scope
//! - Resolution is dynamic along the captured chain, so a global declared
//!   after the function is still visible when it runs

mod common;

use common::{assert_output, assert_runtime_error};

#[test]
fn test_counter_keeps_state() {
    assert_output(
        r#"
        fun makeCounter() {
          var i = 0;
          fun count() {
            i = i + 1;
            print i;
          }
          return count;
        }
        var counter = makeCounter();
        counter();
        counter();
        "#,
        "1\n2\n",
    );
}

#[test]
fn test_free_variable_resolves_in_declaring_scope() {
    assert_output(
        r#"
        var a = "global";
        fun show() {
          print a;
        }
        {
          var a = "local";
          show();
        }
        "#,
        "global\n",
    );
}

#[test]
fn test_counters_are_independent() {
    assert_output(
        r#"
        fun makeCounter() {
          var i = 0;
          fun count() { i = i + 1; return i; }
          return count;
        }
        var a = makeCounter();
        var b = makeCounter();
        a(); a();
        print a();
        print b();
        "#,
        "3\n1\n",
    );
}

#[test]
fn test_shared_scope_between_closures() {
    assert_output(
        r#"
        var get;
        var set;
        fun make() {
          var value = "initial";
          fun getter() { return value; }
          fun setter(v) { value = v; }
          get = getter;
          set = setter;
        }
        make();
        print get();
        set("updated");
        print get();
        "#,
        "initial\nupdated\n",
    );
}

#[test]
fn test_closure_over_parameter() {
    assert_output(
        r#"
        fun adder(n) {
          fun add(x) { return x + n; }
          return add;
        }
        var add5 = adder(5);
        print add5(10);
        print adder(1)(1);
        "#,
        "15\n2\n",
    );
}

#[test]
fn test_late_global_is_visible() {
    assert_output(
        r#"
        fun show() { print later; }
        var later = "defined after";
        show();
        "#,
        "defined after\n",
    );
}

#[test]
fn test_closure_sees_later_assignment() {
    assert_output(
        r#"
        var x = "before";
        fun show() { print x; }
        x = "after";
        show();
        "#,
        "after\n",
    );
}

#[test]
fn test_local_function_not_visible_outside() {
    assert_runtime_error(
        "fun outer() { fun inner() {} }\nouter();\ninner();",
        "[line 3] Error at 'inner': Undefined variable 'inner'.",
    );
}

#[test]
fn test_recursive_local_function() {
    assert_output(
        r#"
        fun run() {
          fun down(n) {
            if (n < 0) return;
            print n;
            down(n - 1);
          }
          down(2);
        }
        run();
        "#,
        "2\n1\n0\n",
    );
}
