/*!
# Accumulators and Strings

## `even-sum`
An accumulator starts at zero and collects a running total. This
drill counts from 1 to 100 and adds each value divisible by 2.
Nothing prints until the loop ends.
```text
Sum of even numbers is: 2550
```

## `chars`
The loop counter can also be an index. This drill walks the
string `JavaScript` from index 0 to its length minus one and
prints one character per line.
```text
J
a
v
a
S
c
r
i
p
t
```

Indexes count characters, not bytes, so `año` prints three lines.
*/
