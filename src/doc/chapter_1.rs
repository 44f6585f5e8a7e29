/*!
# Counting Loops

The simplest loop counts from one number to another. Both ends
are included. If the start is already past the end, the loop
runs zero times.

## `range`
Counts from 1 to 10 and prints every value.
```text
Iteration is: 1
Iteration is: 2
Iteration is: 3
Iteration is: 4
Iteration is: 5
Iteration is: 6
Iteration is: 7
Iteration is: 8
Iteration is: 9
Iteration is: 10
```

## `table`
Counts from 1 to 10 and multiplies each value by 5.
```text
5 * 1 = 5
5 * 2 = 10
5 * 3 = 15
5 * 4 = 20
5 * 5 = 25
5 * 6 = 30
5 * 7 = 35
5 * 8 = 40
5 * 9 = 45
5 * 10 = 50
```

A product too large for a 64-bit integer stops the drill with
`OVERFLOW IN table` instead of wrapping around.
*/
